use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::database::change_set::ChangeSet;
use crate::models::client::{Client, NewClient};

/// Every field is required and must be non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateClientPayload {
    #[validate(length(min = 1))]
    pub phone_number: String,
    #[validate(length(min = 1))]
    pub mobile_operator_code: String,
    #[validate(length(min = 1))]
    pub tag: String,
    #[validate(length(min = 1))]
    pub timezone: String,
}

/// Partial update: absent fields (and explicit `null`) keep their stored value.
/// Supplied fields follow the same non-empty rule as on create.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct UpdateClientPayload {
    #[validate(length(min = 1))]
    pub phone_number: Option<String>,
    #[validate(length(min = 1))]
    pub mobile_operator_code: Option<String>,
    #[validate(length(min = 1))]
    pub tag: Option<String>,
    #[validate(length(min = 1))]
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClientResponse {
    pub id: i64,
    pub phone_number: String,
    pub mobile_operator_code: String,
    pub tag: String,
    pub timezone: String,
}

impl From<CreateClientPayload> for NewClient {
    fn from(value: CreateClientPayload) -> Self {
        Self {
            phone_number: value.phone_number,
            mobile_operator_code: value.mobile_operator_code,
            tag: value.tag,
            timezone: value.timezone,
        }
    }
}

impl From<UpdateClientPayload> for ChangeSet {
    fn from(value: UpdateClientPayload) -> Self {
        ChangeSet::new()
            .set_opt("phone_number", value.phone_number)
            .set_opt("mobile_operator_code", value.mobile_operator_code)
            .set_opt("tag", value.tag)
            .set_opt("timezone", value.timezone)
    }
}

impl From<Client> for ClientResponse {
    fn from(value: Client) -> Self {
        Self {
            id: value.id,
            phone_number: value.phone_number,
            mobile_operator_code: value.mobile_operator_code,
            tag: value.tag,
            timezone: value.timezone,
        }
    }
}
