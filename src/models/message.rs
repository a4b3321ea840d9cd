use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::entity::Entity;

/// One delivery attempt of a mailing to a client.
///
/// Rows are written by the delivery worker and never rewritten here. A reference
/// may point at a mailing or client that has since been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Message {
    pub id: i64,
    pub created_at: NaiveDateTime,
    pub status: String,
    pub mailing_id: Option<i64>,
    pub client_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct NewMessage {
    pub status: String,
    pub mailing_id: i64,
    pub client_id: i64,
    pub created_at: Option<NaiveDateTime>,
}

impl Entity for Message {
    const LABEL: &'static str = "Message";
    const TABLE: &'static str = "messages";
    const COLUMNS: &'static str = "id, created_at, status, mailing_id, client_id";
}
