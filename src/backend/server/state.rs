/**
 * Application State Management
 *
 * This module defines the application context passed to every handler and
 * the `FromRef` implementations for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is constructed once at startup and holds:
 * - the datastore handle (`Database`)
 * - the session manager
 * - the authenticator (which owns the password hasher)
 * - the loaded configuration
 *
 * Every field is cheap to clone and shares its underlying resource, so Axum
 * can hand a copy to each request.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::authenticator::Authenticator;
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::SessionManager;
use crate::backend::error::BackendError;
use crate::backend::store::Database;
use crate::shared::AppConfig;

/// Application context shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// User and post storage
    pub db: Database,

    /// Live sessions keyed by token
    pub sessions: SessionManager,

    /// Credential checking against `db`
    pub authenticator: Authenticator,

    /// Loaded configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build the context from a validated configuration and a datastore
    ///
    /// # Errors
    /// `BackendError::Config` for an invalid configuration and
    /// `BackendError::Hashing` if the password cost is rejected by bcrypt.
    pub fn new(config: AppConfig, db: Database) -> Result<Self, BackendError> {
        config.validate()?;
        let hasher = PasswordHasher::new(config.password_cost)?;
        let authenticator = Authenticator::new(db.users(), hasher);
        let sessions = SessionManager::from_config(&config.session);

        Ok(Self {
            db,
            sessions,
            authenticator,
            config: Arc::new(config),
        })
    }

    /// Context over the in-memory store
    pub fn in_memory(config: AppConfig) -> Result<Self, BackendError> {
        Self::new(config, Database::in_memory())
    }

    /// Release the datastore; sessions die with the process
    pub async fn shutdown(&self) {
        let remaining = self.sessions.len().await;
        tracing::info!("Shutting down with {} live sessions", remaining);
        self.db.close().await;
    }
}

impl FromRef<AppState> for SessionManager {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for Authenticator {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.authenticator.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
