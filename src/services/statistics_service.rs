use std::collections::BTreeMap;

use sqlx::PgPool;
use tracing::debug;

use crate::database::store;
use crate::error::Result;
use crate::models::mailing::Mailing;
use crate::models::statistics::{MailingStatistics, StatusCountRow};
use crate::services::mutation;

#[derive(Clone)]
pub struct StatisticsService {
    pool: PgPool,
}

impl StatisticsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Counts for one mailing. An unknown id yields all-zero counts.
    pub async fn mailing_statistics(&self, mailing_id: i64) -> Result<MailingStatistics> {
        let mut conn = self.pool.acquire().await?;
        let counts = store::status_counts_for_mailing(&mut *conn, mailing_id).await?;
        debug!(mailing_id, groups = counts.len(), "Mailing statistics computed");
        Ok(MailingStatistics::from_counts(mailing_id, counts))
    }

    /// Like [`Self::mailing_statistics`] but fails with `NotFound` for an unknown mailing.
    pub async fn mailing_statistics_checked(&self, mailing_id: i64) -> Result<MailingStatistics> {
        let mut conn = self.pool.acquire().await?;
        if store::find_by_id::<Mailing>(&mut *conn, mailing_id)
            .await?
            .is_none()
        {
            return Err(mutation::not_found::<Mailing>(mailing_id));
        }
        let counts = store::status_counts_for_mailing(&mut *conn, mailing_id).await?;
        Ok(MailingStatistics::from_counts(mailing_id, counts))
    }

    /// One entry per stored mailing, ascending by id, from a single grouped query.
    pub async fn all_mailings_statistics(&self) -> Result<Vec<MailingStatistics>> {
        let mut conn = self.pool.acquire().await?;
        let rows = store::status_counts_by_mailing(&mut *conn).await?;
        let stats = fan_out(rows);
        debug!(mailings = stats.len(), "All mailings statistics computed");
        Ok(stats)
    }
}

/// Folds grouped `(mailing, status)` rows into one entry per mailing.
pub fn fan_out(rows: impl IntoIterator<Item = StatusCountRow>) -> Vec<MailingStatistics> {
    let mut by_mailing: BTreeMap<i64, MailingStatistics> = BTreeMap::new();
    for row in rows {
        let stats = by_mailing
            .entry(row.mailing_id)
            .or_insert_with(|| MailingStatistics::empty(row.mailing_id));
        if let Some(status) = row.status.as_deref() {
            stats.record(status, row.count);
        }
    }
    by_mailing.into_values().collect()
}
