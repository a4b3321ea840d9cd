use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::mailing::Mailing;
use crate::models::message::Message;
use crate::utils::time::InputTimestamp;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMailingPayload {
    #[validate(length(min = 1))]
    pub message_text: String,
    #[schema(value_type = String, format = DateTime)]
    pub start_time: InputTimestamp,
    #[schema(value_type = String, format = DateTime)]
    pub end_time: InputTimestamp,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub filter_criteria: Option<Map<String, JsonValue>>,
}

/// Full replacement of a mailing; every field is required.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMailingPayload {
    #[validate(length(min = 1))]
    pub message_text: String,
    #[schema(value_type = String, format = DateTime)]
    pub start_time: InputTimestamp,
    #[schema(value_type = String, format = DateTime)]
    pub end_time: InputTimestamp,
    #[schema(value_type = Object)]
    pub filter_criteria: Map<String, JsonValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MailingResponse {
    pub id: i64,
    pub message_text: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[schema(value_type = Object)]
    pub filter_criteria: JsonValue,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub id: i64,
    pub created_at: NaiveDateTime,
    pub status: String,
    pub mailing_id: Option<i64>,
    pub client_id: Option<i64>,
}

impl From<Mailing> for MailingResponse {
    fn from(value: Mailing) -> Self {
        Self {
            id: value.id,
            message_text: value.message_text,
            start_time: value.start_time,
            end_time: value.end_time,
            filter_criteria: value.filter_criteria,
        }
    }
}

impl From<Message> for MessageResponse {
    fn from(value: Message) -> Self {
        Self {
            id: value.id,
            created_at: value.created_at,
            status: value.status,
            mailing_id: value.mailing_id,
            client_id: value.client_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn filter_criteria_is_optional_on_create() {
        let payload: CreateMailingPayload = serde_json::from_value(json!({
            "message_text": "Spring sale",
            "start_time": "2024-01-01T10:00:00+03:00",
            "end_time": "2024-01-02T10:00:00"
        }))
        .unwrap();
        assert!(payload.filter_criteria.is_none());
        assert!(matches!(payload.start_time, InputTimestamp::Aware(_)));
        assert!(matches!(payload.end_time, InputTimestamp::Naive(_)));
    }

    #[test]
    fn update_rejects_a_subset_of_fields() {
        let subset = json!({
            "message_text": "Spring sale",
            "start_time": "2024-01-01T10:00:00",
            "end_time": "2024-01-02T10:00:00"
        });
        assert!(serde_json::from_value::<UpdateMailingPayload>(subset).is_err());
    }

    #[test]
    fn filter_criteria_must_be_an_object() {
        let payload = json!({
            "message_text": "Spring sale",
            "start_time": "2024-01-01T10:00:00",
            "end_time": "2024-01-02T10:00:00",
            "filter_criteria": ["tag", "vip"]
        });
        assert!(serde_json::from_value::<UpdateMailingPayload>(payload).is_err());
    }
}
