/**
 * Account Routes
 *
 * # Routes
 *
 * - `GET /sign-up` - Sign-up form
 * - `POST /sign-up` - Create a user, redirect to `/`
 * - `GET /login` - Login form
 * - `POST /login` - Authenticate, set the session cookie, redirect
 * - `GET /logout` - Destroy the session, redirect to `/`
 */

use axum::{routing::get, Router};

use crate::backend::auth::{login, login_form, logout, sign_up, sign_up_form};
use crate::backend::server::state::AppState;

/// Configure account routes
///
/// All account routes are public; the login route is where the access guard
/// sends anonymous visitors.
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/sign-up", get(sign_up_form).post(sign_up))
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout))
}
