//! Storage Module
//!
//! This module holds the datastore backends behind the `UserStore` and
//! `PostStore` traits, and the `Database` handle that the application state
//! carries.
//!
//! # Backends
//!
//! - **`postgres`** - `sqlx` PostgreSQL pool, used when `database_url` is set
//! - **`memory`** - process-local maps, used when no database is configured
//!   and by the test suite
//!
//! Both backends make every mutation a single atomic write: one SQL statement,
//! or one map update under a write lock.

/// PostgreSQL backend
pub mod postgres;

/// In-memory backend
pub mod memory;

use std::sync::Arc;

use sqlx::PgPool;
use thiserror::Error;

use crate::backend::auth::users::UserStore;
use crate::backend::board::db::PostStore;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors raised by the storage backends
#[derive(Debug, Error)]
pub enum StoreError {
    /// A user with this username already exists
    #[error("username already taken: {0}")]
    UsernameTaken(String),

    /// Datastore unreachable or a query failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failed
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Handle to the configured datastore
///
/// Cloning is cheap; all clones share the same backend.
#[derive(Clone)]
pub struct Database {
    users: Arc<dyn UserStore>,
    posts: Arc<dyn PostStore>,
    pool: Option<PgPool>,
}

impl Database {
    /// Process-local store; contents are lost on restart
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            users: store.clone(),
            posts: store,
            pool: None,
        }
    }

    /// PostgreSQL store over an existing pool
    pub fn postgres(pool: PgPool) -> Self {
        let store = Arc::new(PgStore::new(pool.clone()));
        Self {
            users: store.clone(),
            posts: store,
            pool: Some(pool),
        }
    }

    pub fn users(&self) -> Arc<dyn UserStore> {
        self.users.clone()
    }

    pub fn posts(&self) -> Arc<dyn PostStore> {
        self.posts.clone()
    }

    /// Short name of the active backend, for logs
    pub fn backend_name(&self) -> &'static str {
        if self.pool.is_some() {
            "postgres"
        } else {
            "memory"
        }
    }

    /// Close the connection pool, waiting for checked-out connections
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
            tracing::info!("Database connection pool closed");
        }
    }
}
