/**
 * Message Board Routes
 *
 * # Routes
 *
 * - `GET /` - List posts with authors (public)
 * - `GET /create-message` - New message form (members only)
 * - `POST /create-message` - Store a post (members only)
 * - `GET /health` - Liveness probe
 */

use axum::{routing::get, Router};

use crate::backend::board::{create_message, create_message_form, index};
use crate::backend::server::state::AppState;

/// Configure board routes
///
/// The members-only routes are guarded by the `RequireUser` extractor in
/// their handlers, not by a route layer.
pub fn configure_board_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(index))
        .route("/create-message", get(create_message_form).post(create_message))
        .route("/health", get(|| async { "ok" }))
}
