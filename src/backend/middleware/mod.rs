//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//!
//! - **`auth`** - session resolution and the access guard extractors

pub mod auth;

pub use auth::{require_authenticated, resolve_session, AccessDenied, MaybeUser, RequireUser};
