/**
 * Login Handlers
 *
 * `GET /login` renders the form; `POST /login` checks the credentials and
 * starts a session.
 *
 * # Authentication Process
 *
 * 1. Authenticate username and password
 * 2. Destroy any session the client already presents
 * 3. Create a session and set the session cookie
 * 4. Redirect to `/`
 *
 * Both rejection reasons redirect back to `/login` without a message and
 * without creating a session.
 */

use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::cookies::{session_cookie, session_token};
use crate::backend::auth::handlers::types::LoginForm;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::views;

/// Render the login form
pub async fn login_form() -> Html<String> {
    Html(views::login_page())
}

/// Login handler
///
/// # Errors
///
/// * `500 Internal Server Error` - the user lookup failed
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<(CookieJar, Redirect), BackendError> {
    let username = form.username.trim().to_string();
    tracing::info!("Login request for: {}", username);

    let identity = match state.authenticator.authenticate(&username, &form.password).await {
        Ok(identity) => identity,
        Err(BackendError::Auth(reason)) => {
            tracing::warn!("Login rejected for {}: {}", username, reason);
            return Ok((jar, Redirect::to("/login")));
        }
        Err(e) => return Err(e),
    };

    if let Some(previous) = session_token(&jar) {
        state.sessions.destroy(&previous).await;
    }

    let token = state.sessions.create(identity.clone()).await;
    let session = &state.config.session;
    let cookie = session_cookie(token.as_str(), session.max_age_secs, session.cookie_secure);

    tracing::info!("User logged in successfully: {} ({})", identity.username, identity.user_id);

    Ok((jar.add(cookie), Redirect::to("/")))
}
