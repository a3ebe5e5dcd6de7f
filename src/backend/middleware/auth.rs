/**
 * Authentication Middleware
 *
 * This module resolves the session cookie on every request and provides the
 * extractors handlers use to read the result:
 *
 * - `MaybeUser` - the identity if there is one; pages open to everyone
 * - `RequireUser` - the access guard; anonymous requests are redirected to
 *   `/login` before the handler runs
 */

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, Extensions},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::cookies::session_token;
use crate::backend::auth::sessions::SessionManager;
use crate::shared::Identity;

/// Session resolution middleware
///
/// This middleware:
/// 1. Reads the session token from the cookie jar
/// 2. Resolves it through the session manager
/// 3. Attaches the `Identity` to request extensions when the session is live
///
/// A missing, unknown or expired token leaves the request anonymous; it is
/// never rejected here.
pub async fn resolve_session(
    State(sessions): State<SessionManager>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(token) = session_token(&jar) {
        match sessions.resolve(&token).await {
            Some(identity) => {
                request.extensions_mut().insert(identity);
            }
            None => tracing::debug!("Session cookie did not resolve; treating request as anonymous"),
        }
    }

    next.run(request).await
}

/// Rejection produced by the access guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessDenied;

impl IntoResponse for AccessDenied {
    fn into_response(self) -> Response {
        Redirect::to("/login").into_response()
    }
}

/// Read the authenticated identity from request extensions
///
/// # Errors
/// `AccessDenied` when the request carries no live session.
pub fn require_authenticated(extensions: &Extensions) -> Result<Identity, AccessDenied> {
    extensions.get::<Identity>().cloned().ok_or_else(|| {
        tracing::warn!("Anonymous request to a members-only action");
        AccessDenied
    })
}

/// Axum extractor for the optional identity
#[derive(Clone, Debug)]
pub struct MaybeUser(pub Option<Identity>);

impl<S: Send + Sync> FromRequestParts<S> for MaybeUser {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(parts.extensions.get::<Identity>().cloned()))
    }
}

/// Axum extractor that requires an authenticated identity
#[derive(Clone, Debug)]
pub struct RequireUser(pub Identity);

impl<S: Send + Sync> FromRequestParts<S> for RequireUser {
    type Rejection = AccessDenied;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        require_authenticated(&parts.extensions).map(RequireUser)
    }
}
