/**
 * Logout Handler
 *
 * `GET /logout` destroys the session the client presents, clears the cookie
 * and redirects to the board. Logging out without a session is not an error.
 */

use axum::{extract::State, response::Redirect};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::cookies::{clear_session_cookie, session_token};
use crate::backend::server::state::AppState;

/// Logout handler
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    if let Some(token) = session_token(&jar) {
        if state.sessions.destroy(&token).await {
            tracing::info!("Session destroyed on logout");
        }
    }

    let jar = jar.add(clear_session_cookie(state.config.session.cookie_secure));
    (jar, Redirect::to("/"))
}
