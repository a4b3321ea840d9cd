use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Message statuses that have a published bucket. Anything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Sent,
    Delivered,
    Failed,
}

impl DeliveryStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "sent" => Some(DeliveryStatus::Sent),
            "delivered" => Some(DeliveryStatus::Delivered),
            "failed" => Some(DeliveryStatus::Failed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Sent => "sent",
            DeliveryStatus::Delivered => "delivered",
            DeliveryStatus::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailingStatistics {
    pub mailing_id: i64,
    pub sent: i64,
    pub delivered: i64,
    pub failed: i64,
}

impl MailingStatistics {
    pub fn empty(mailing_id: i64) -> Self {
        Self {
            mailing_id,
            sent: 0,
            delivered: 0,
            failed: 0,
        }
    }

    pub fn record(&mut self, status: &str, count: i64) {
        match DeliveryStatus::parse(status) {
            Some(DeliveryStatus::Sent) => self.sent += count,
            Some(DeliveryStatus::Delivered) => self.delivered += count,
            Some(DeliveryStatus::Failed) => self.failed += count,
            None => {}
        }
    }

    pub fn from_counts<I, S>(mailing_id: i64, counts: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let mut stats = Self::empty(mailing_id);
        for (status, count) in counts {
            stats.record(status.as_ref(), count);
        }
        stats
    }
}

/// One row of the grouped `(mailing, status)` count query.
///
/// `status` is `None` for a mailing without any messages.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct StatusCountRow {
    pub mailing_id: i64,
    pub status: Option<String>,
    pub count: i64,
}
