pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::models::entity::DeleteMode;
use crate::services::{
    client_service::ClientService, mailing_service::MailingService,
    statistics_service::StatisticsService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub client_service: ClientService,
    pub mailing_service: MailingService,
    pub statistics_service: StatisticsService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();
        Self::with_delete_modes(pool, config.client_delete_mode, config.mailing_delete_mode)
    }

    pub fn with_delete_modes(
        pool: PgPool,
        client_delete_mode: DeleteMode,
        mailing_delete_mode: DeleteMode,
    ) -> Self {
        let client_service = ClientService::new(pool.clone(), client_delete_mode);
        let mailing_service = MailingService::new(pool.clone(), mailing_delete_mode);
        let statistics_service = StatisticsService::new(pool.clone());

        Self {
            pool,
            client_service,
            mailing_service,
            statistics_service,
        }
    }
}
