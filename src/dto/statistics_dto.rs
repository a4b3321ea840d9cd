use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::statistics::MailingStatistics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MailingStatisticsResponse {
    pub mailing_id: i64,
    pub sent: i64,
    pub delivered: i64,
    pub failed: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct StatisticsQuery {
    /// Respond with 404 instead of zero counts when the mailing does not exist.
    pub strict: Option<bool>,
}

impl From<MailingStatistics> for MailingStatisticsResponse {
    fn from(value: MailingStatistics) -> Self {
        Self {
            mailing_id: value.mailing_id,
            sent: value.sent,
            delivered: value.delivered,
            failed: value.failed,
        }
    }
}
