use chrono::NaiveDateTime;
use serde_json::Value as JsonValue;

use crate::error::{Error, Result};
use crate::models::entity::{Mutable, UpdateMode};

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Text(String),
    Timestamp(NaiveDateTime),
    Json(JsonValue),
}

impl From<String> for ColumnValue {
    fn from(value: String) -> Self {
        ColumnValue::Text(value)
    }
}

impl From<NaiveDateTime> for ColumnValue {
    fn from(value: NaiveDateTime) -> Self {
        ColumnValue::Timestamp(value)
    }
}

impl From<JsonValue> for ColumnValue {
    fn from(value: JsonValue) -> Self {
        ColumnValue::Json(value)
    }
}

/// Column assignments for a single `UPDATE`, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeSet {
    values: Vec<(&'static str, ColumnValue)>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, column: &'static str, value: impl Into<ColumnValue>) -> Self {
        self.values.retain(|(existing, _)| *existing != column);
        self.values.push((column, value.into()));
        self
    }

    /// Adds the column only when a value was supplied.
    pub fn set_opt<V: Into<ColumnValue>>(self, column: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(column, value),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.values.iter().any(|(existing, _)| *existing == column)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, ColumnValue)> {
        self.values.iter()
    }

    /// Checks the assignments against the entity's update mode.
    pub fn check_for<E: Mutable>(&self) -> Result<()> {
        if let Some((column, _)) = self
            .values
            .iter()
            .find(|(column, _)| !E::MUTABLE_COLUMNS.contains(column))
        {
            return Err(Error::Internal(format!(
                "Column {} is not mutable on {}",
                column,
                E::TABLE
            )));
        }

        if E::UPDATE_MODE == UpdateMode::Replace {
            let missing: Vec<&str> = E::MUTABLE_COLUMNS
                .iter()
                .copied()
                .filter(|column| !self.contains(column))
                .collect();
            if !missing.is_empty() {
                return Err(Error::BadRequest(format!(
                    "{} update replaces every field; missing {}",
                    E::LABEL,
                    missing.join(", ")
                )));
            }
        }

        Ok(())
    }
}
