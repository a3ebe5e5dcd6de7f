//! Application configuration module
//!
//! Provides the configuration types for the server: listening address,
//! datastore connection, password work factor and session policy. Values come
//! from defaults, an optional TOML file and environment overrides; see
//! `backend::server::config` for the loading order.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Lowest bcrypt cost accepted by the hasher
pub const MIN_PASSWORD_COST: u32 = 4;

/// Highest bcrypt cost accepted by the hasher
pub const MAX_PASSWORD_COST: u32 = 31;

/// Longest accepted session lifetime, one year
pub const MAX_SESSION_AGE_SECS: u64 = 365 * 24 * 60 * 60;

/// Session policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Session lifetime in seconds, also sent as the cookie `Max-Age`.
    ///
    /// The default of 360 seconds is a placeholder, not a security policy.
    pub max_age_secs: u64,
    /// Push the deadline out on every successful resolve
    pub sliding: bool,
    /// Mark the session cookie `Secure`
    pub cookie_secure: bool,
    /// How often the background sweeper purges expired sessions
    pub sweep_interval_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_age_secs: 360,
            sliding: false,
            cookie_secure: false,
            sweep_interval_secs: 60,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Interface to bind
    pub bind_address: String,
    /// Listening port
    pub port: u16,
    /// PostgreSQL connection string; the in-memory store is used when absent
    pub database_url: Option<String>,
    /// Directory served for unmatched paths
    pub static_dir: PathBuf,
    /// bcrypt work factor
    pub password_cost: u32,
    /// Default `tracing` filter when `RUST_LOG` is unset
    pub log_filter: String,
    pub session: SessionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
            database_url: None,
            static_dir: PathBuf::from("public"),
            password_cost: 10,
            log_filter: "info".to_string(),
            session: SessionConfig::default(),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PASSWORD_COST..=MAX_PASSWORD_COST).contains(&self.password_cost) {
            return Err(ConfigError::InvalidValue {
                key: "password_cost",
                message: format!(
                    "must be between {} and {}, got {}",
                    MIN_PASSWORD_COST, MAX_PASSWORD_COST, self.password_cost
                ),
            });
        }
        if !(1..=MAX_SESSION_AGE_SECS).contains(&self.session.max_age_secs) {
            return Err(ConfigError::InvalidValue {
                key: "session.max_age_secs",
                message: format!(
                    "must be between 1 and {}, got {}",
                    MAX_SESSION_AGE_SECS, self.session.max_age_secs
                ),
            });
        }
        if self.session.sweep_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "session.sweep_interval_secs",
                message: "must be greater than zero".to_string(),
            });
        }
        if let Some(url) = &self.database_url {
            if !(url.starts_with("postgres://") || url.starts_with("postgresql://")) {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        if self.bind_address.trim().is_empty() {
            return Err(ConfigError::MissingValue("bind_address"));
        }
        Ok(())
    }

    /// `bind_address:port`
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn bind_address(mut self, address: impl Into<String>) -> Self {
        self.config.bind_address = address.into();
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = Some(url.into());
        self
    }

    pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.static_dir = dir.into();
        self
    }

    pub fn password_cost(mut self, cost: u32) -> Self {
        self.config.password_cost = cost;
        self
    }

    pub fn session_max_age_secs(mut self, secs: u64) -> Self {
        self.config.session.max_age_secs = secs;
        self
    }

    pub fn session_sliding(mut self, sliding: bool) -> Self {
        self.config.session.sliding = sliding;
        self
    }

    pub fn cookie_secure(mut self, secure: bool) -> Self {
        self.config.session.cookie_secure = secure;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.port, 3000);
        assert_eq!(config.password_cost, 10);
        assert_eq!(config.session.max_age_secs, 360);
        assert!(!config.session.sliding);
    }

    #[test]
    fn test_builder_overrides() {
        let config = AppConfig::builder()
            .port(8080)
            .password_cost(4)
            .session_max_age_secs(3600)
            .session_sliding(true)
            .build()
            .unwrap();
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
        assert_eq!(config.password_cost, 4);
        assert_eq!(config.session.max_age_secs, 3600);
        assert!(config.session.sliding);
    }

    #[test]
    fn test_rejects_out_of_range_cost() {
        let err = AppConfig::builder().password_cost(3).build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "password_cost", .. }));
    }

    #[test]
    fn test_rejects_zero_max_age() {
        let err = AppConfig::builder().session_max_age_secs(0).build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "session.max_age_secs", .. }));

        let err = AppConfig::builder()
            .session_max_age_secs(MAX_SESSION_AGE_SECS + 1)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "session.max_age_secs", .. }));
    }

    #[test]
    fn test_rejects_non_postgres_url() {
        let err = AppConfig::builder()
            .database_url("mongodb://localhost/members_only")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));
    }

    #[test]
    fn test_from_toml_partial() {
        let config = AppConfig::from_toml_str(
            r#"
            port = 4000

            [session]
            max_age_secs = 900
            "#,
        )
        .unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.session.max_age_secs, 900);
        assert_eq!(config.session.sweep_interval_secs, 60);
        assert_eq!(config.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        assert!(matches!(
            AppConfig::from_toml_str("port = \"not a number\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
