use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::entity::{Entity, Mutable, UpdateMode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: i64,
    pub phone_number: String,
    pub mobile_operator_code: String,
    pub tag: String,
    pub timezone: String,
}

#[derive(Debug, Clone)]
pub struct NewClient {
    pub phone_number: String,
    pub mobile_operator_code: String,
    pub tag: String,
    pub timezone: String,
}

impl Entity for Client {
    const LABEL: &'static str = "Client";
    const TABLE: &'static str = "clients";
    const COLUMNS: &'static str = "id, phone_number, mobile_operator_code, tag, timezone";
}

impl Mutable for Client {
    const UPDATE_MODE: UpdateMode = UpdateMode::Partial;
    const MUTABLE_COLUMNS: &'static [&'static str] =
        &["phone_number", "mobile_operator_code", "tag", "timezone"];
    const MESSAGE_REFERENCE: &'static str = "client_id";
}
