use crate::config::{get_config, Config};
use crate::error::Result;
use sqlx::{postgres::PgPoolOptions, PgPool};

pub async fn create_pool() -> Result<PgPool> {
    create_pool_with(get_config()).await
}

pub async fn create_pool_with(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(std::time::Duration::from_secs(
            config.db_acquire_timeout_secs,
        ))
        .connect_with(config.database.clone())
        .await?;
    Ok(pool)
}
