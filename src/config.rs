use crate::error::{Error, Result};
use crate::models::entity::DeleteMode;
use dotenvy::dotenv;
use sqlx::postgres::PgConnectOptions;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database: PgConnectOptions,
    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,
    pub client_delete_mode: DeleteMode,
    pub mailing_delete_mode: DeleteMode,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let database = match env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => parse_value("DATABASE_URL", &url)?,
            _ => database_from_parts()?,
        };

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database,
            db_max_connections: get_env_parse_or("DB_MAX_CONNECTIONS", 10)?,
            db_acquire_timeout_secs: get_env_parse_or("DB_ACQUIRE_TIMEOUT_SECS", 30)?,
            client_delete_mode: get_env_parse_or("CLIENT_DELETE_MODE", DeleteMode::default())?,
            mailing_delete_mode: get_env_parse_or("MAILING_DELETE_MODE", DeleteMode::default())?,
        })
    }
}

/// Builds connection options from the discrete `DB_*` variables.
fn database_from_parts() -> Result<PgConnectOptions> {
    Ok(connect_options(
        &get_env("DB_HOST")?,
        get_env_parse("DB_PORT")?,
        &get_env("DB_USER")?,
        &get_env("DB_PASS")?,
        &get_env("DB_NAME")?,
    ))
}

/// Credentials are passed as-is, so reserved URL characters need no escaping.
pub fn connect_options(
    host: &str,
    port: u16,
    user: &str,
    pass: &str,
    name: &str,
) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(host)
        .port(port)
        .username(user)
        .password(pass)
        .database(name)
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse<T>(name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = get_env(name)?;
    parse_value(name, &raw)
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => parse_value(name, &raw),
        _ => Ok(default),
    }
}

fn parse_value<T>(name: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e)))
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
