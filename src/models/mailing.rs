use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;

use crate::models::entity::{Entity, Mutable, UpdateMode};

/// A campaign. `start_time` and `end_time` are stored without an offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Mailing {
    pub id: i64,
    pub message_text: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub filter_criteria: JsonValue,
}

#[derive(Debug, Clone)]
pub struct NewMailing {
    pub message_text: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub filter_criteria: JsonValue,
}

impl Entity for Mailing {
    const LABEL: &'static str = "Mailing";
    const TABLE: &'static str = "mailings";
    const COLUMNS: &'static str = "id, message_text, start_time, end_time, filter_criteria";
}

impl Mutable for Mailing {
    const UPDATE_MODE: UpdateMode = UpdateMode::Replace;
    const MUTABLE_COLUMNS: &'static [&'static str] =
        &["message_text", "start_time", "end_time", "filter_criteria"];
    const MESSAGE_REFERENCE: &'static str = "mailing_id";
}
