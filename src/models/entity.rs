use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, FromRow};
use std::fmt;
use std::str::FromStr;

/// How an update call treats columns the caller did not supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// Only supplied columns change; the rest keep their stored value.
    Partial,
    /// Every mutable column must be supplied and is overwritten.
    Replace,
}

/// What happens to referencing messages when an entity is deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeleteMode {
    /// Refuse the delete while any message references the entity.
    Restrict,
    /// Delete referencing messages together with the entity.
    Cascade,
    /// Leave referencing messages untouched; their reference keeps the deleted id.
    #[default]
    Orphan,
}

impl DeleteMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeleteMode::Restrict => "restrict",
            DeleteMode::Cascade => "cascade",
            DeleteMode::Orphan => "orphan",
        }
    }
}

impl fmt::Display for DeleteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeleteMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "restrict" => Ok(DeleteMode::Restrict),
            "cascade" => Ok(DeleteMode::Cascade),
            "orphan" => Ok(DeleteMode::Orphan),
            other => Err(format!(
                "unknown delete mode '{}', expected restrict, cascade or orphan",
                other
            )),
        }
    }
}

/// A stored record addressable by its numeric id.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Send + Unpin + 'static {
    /// Human readable name used in error messages.
    const LABEL: &'static str;
    const TABLE: &'static str;
    /// Select list, `id` first.
    const COLUMNS: &'static str;
}

/// An entity this service creates, updates and deletes.
pub trait Mutable: Entity {
    const UPDATE_MODE: UpdateMode;
    /// Columns an update may touch. For `Replace` entities all of them are required.
    const MUTABLE_COLUMNS: &'static [&'static str];
    /// Column on `messages` holding a reference to this entity.
    const MESSAGE_REFERENCE: &'static str;
}
