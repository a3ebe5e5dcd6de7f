/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 */

use axum::{middleware, Router};
use tower_http::services::ServeDir;

use crate::backend::middleware::auth::resolve_session;
use crate::backend::routes::auth_routes::configure_auth_routes;
use crate::backend::routes::board_routes::configure_board_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application context shared with every handler
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_board_routes(Router::new());
    let router = configure_auth_routes(router);

    // Unmatched paths fall through to the static directory; ServeDir answers 404 itself.
    let router = router.fallback_service(ServeDir::new(&app_state.config.static_dir));

    router
        .layer(middleware::from_fn_with_state(app_state.clone(), resolve_session))
        .with_state(app_state)
}
