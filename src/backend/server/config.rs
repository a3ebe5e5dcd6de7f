/**
 * Server Configuration
 *
 * This module handles loading of the server configuration and the datastore
 * connection.
 *
 * # Configuration Sources
 *
 * Later sources override earlier ones:
 * 1. Built-in defaults (`AppConfig::default()`)
 * 2. A TOML file, if `BOARD_CONFIG` names one
 * 3. Environment variables (`DATABASE_URL`, `PORT`, `BIND_ADDRESS`,
 *    `STATIC_DIR`, `BCRYPT_COST`, `SESSION_MAX_AGE_SECS`, `SESSION_SLIDING`,
 *    `COOKIE_SECURE`, `LOG_FILTER`)
 *
 * Empty environment values are ignored.
 */

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

use crate::backend::store::{Database, PgStore, StoreError};
use crate::shared::{AppConfig, ConfigError};

/// Environment variable naming the TOML config file
pub const CONFIG_PATH_VAR: &str = "BOARD_CONFIG";

/// Load the configuration from the process environment
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load the configuration using `lookup` in place of the environment
pub fn load_config_from<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    let mut config = match lookup(CONFIG_PATH_VAR) {
        Some(path) => read_config_file(Path::new(&path))?,
        None => AppConfig::default(),
    };

    if let Some(url) = lookup("DATABASE_URL") {
        config.database_url = Some(url);
    }
    if let Some(port) = lookup("PORT") {
        config.port = parse_var("PORT", &port)?;
    }
    if let Some(address) = lookup("BIND_ADDRESS") {
        config.bind_address = address;
    }
    if let Some(dir) = lookup("STATIC_DIR") {
        config.static_dir = PathBuf::from(dir);
    }
    if let Some(cost) = lookup("BCRYPT_COST") {
        config.password_cost = parse_var("BCRYPT_COST", &cost)?;
    }
    if let Some(max_age) = lookup("SESSION_MAX_AGE_SECS") {
        config.session.max_age_secs = parse_var("SESSION_MAX_AGE_SECS", &max_age)?;
    }
    if let Some(sliding) = lookup("SESSION_SLIDING") {
        config.session.sliding = parse_bool("SESSION_SLIDING", &sliding)?;
    }
    if let Some(secure) = lookup("COOKIE_SECURE") {
        config.session.cookie_secure = parse_bool("COOKIE_SECURE", &secure)?;
    }
    if let Some(filter) = lookup("LOG_FILTER") {
        config.log_filter = filter;
    }

    config.validate()?;
    Ok(config)
}

/// Read and parse a TOML config file
///
/// The result is not validated; `load_config_from` validates once, after the
/// environment has been applied.
pub fn read_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&contents)?)
}

fn parse_var<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        message: format!("cannot parse {:?}", value),
    })
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            message: format!("expected a boolean, got {:?}", value),
        }),
    }
}

/// Open the configured datastore
///
/// This function:
/// 1. Uses the in-memory store if no `database_url` is configured
/// 2. Otherwise creates a PostgreSQL connection pool
/// 3. Runs database migrations
///
/// # Errors
///
/// A configured database that cannot be reached fails startup. A failed
/// migration is logged and startup continues, since the schema may already
/// be current.
pub async fn load_database(config: &AppConfig) -> Result<Database, StoreError> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set. Using the in-memory store; data will not survive a restart.");
        return Ok(Database::in_memory());
    };

    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            StoreError::Database(e)
        })?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match PgStore::new(pool.clone()).migrate().await {
        Ok(()) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Ok(Database::postgres(pool))
}
