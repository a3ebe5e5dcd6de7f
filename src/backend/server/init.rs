/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including state creation, datastore loading, and route configuration.
 *
 * # Initialization Process
 *
 * The server initialization follows these steps:
 * 1. Open the datastore (PostgreSQL or in-memory)
 * 2. Build the application state (hasher, authenticator, session manager)
 * 3. Start the expired-session sweeper
 * 4. Create and configure the router
 *
 * # Shutdown
 *
 * `Application::serve` stops accepting connections when the shutdown future
 * resolves, lets in-flight requests finish, then stops the sweeper and closes
 * the datastore.
 */

use std::future::Future;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// A configured server, ready to be bound and served
pub struct Application {
    router: Router<()>,
    state: AppState,
    sweeper: JoinHandle<()>,
}

/// Create and configure the application
///
/// # Errors
///
/// Fails if the configuration is invalid, the password cost is rejected, or
/// a configured database cannot be reached.
pub async fn create_app(config: AppConfig) -> Result<Application, BackendError> {
    tracing::info!("Initializing members-only board server");

    let db = load_database(&config).await?;
    tracing::info!("Using the {} datastore", db.backend_name());

    let state = AppState::new(config, db)?;

    let sweeper = state
        .sessions
        .spawn_sweeper(Duration::from_secs(state.config.session.sweep_interval_secs));

    let router = create_router(state.clone());

    tracing::info!("Router configured with session sweeper");

    Ok(Application {
        router,
        state,
        sweeper,
    })
}

impl Application {
    /// The router, for serving or for driving in tests
    pub fn router(&self) -> Router<()> {
        self.router.clone()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Serve on `listener` until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Ok(addr) = listener.local_addr() {
            tracing::info!("Listening on {}", addr);
        }

        let result = axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await;

        self.sweeper.abort();
        self.state.shutdown().await;

        result
    }
}

/// Resolves on Ctrl+C, or SIGTERM on Unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig::builder()
            .password_cost(4)
            .bind_address("127.0.0.1")
            .port(0)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_app_in_memory() {
        let app = create_app(test_config()).await.unwrap();
        assert_eq!(app.state().db.backend_name(), "memory");
        assert!(app.state().sessions.is_empty().await);
    }

    #[tokio::test]
    async fn test_create_app_rejects_invalid_config() {
        let mut config = test_config();
        config.password_cost = 2;
        assert!(create_app(config).await.is_err());
    }

    #[tokio::test]
    async fn test_serve_stops_on_shutdown() {
        let app = create_app(test_config()).await.unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();

        let server = tokio::spawn(app.serve(listener, async {
            let _ = rx.await;
        }));

        tx.send(()).unwrap();
        let result = tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .unwrap()
            .unwrap();
        assert!(result.is_ok());
    }
}
