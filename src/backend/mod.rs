//! Backend Module
//!
//! This module contains all server-side code for the members-only message
//! board: an Axum HTTP server where anyone can read posts and only signed-in
//! members can write them.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential store, password hashing, login and sessions
//! - **`board`** - Posts and the board pages
//! - **`store`** - PostgreSQL and in-memory datastores
//! - **`middleware`** - Session resolution and the access guard
//! - **`views`** - HTML rendering
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── board/          - Message board
//! ├── store/          - Datastores
//! ├── middleware/     - Request middleware
//! ├── views/          - HTML pages
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! 1. `middleware::auth::resolve_session` reads the session cookie and, if
//!    the session is live, attaches the member's `Identity` to the request
//! 2. Handlers take `MaybeUser` (public pages) or `RequireUser` (members-only
//!    pages, which redirect anonymous visitors to `/login`)
//! 3. Errors surface as `BackendError`, rendered as an HTML error page
//!
//! # Thread Safety
//!
//! - Sessions live in `Arc<RwLock<HashMap>>`
//! - The in-memory store guards its maps with a single `RwLock`
//! - bcrypt runs on the blocking pool via `spawn_blocking`

/// Server setup and configuration
#[cfg(feature = "ssr")]
pub mod server;

/// Route configuration
#[cfg(feature = "ssr")]
pub mod routes;

/// Authentication and user management
#[cfg(feature = "ssr")]
pub mod auth;

/// Message board
#[cfg(feature = "ssr")]
pub mod board;

/// User and post storage
#[cfg(feature = "ssr")]
pub mod store;

/// Middleware for request processing
#[cfg(feature = "ssr")]
pub mod middleware;

/// HTML pages
#[cfg(feature = "ssr")]
pub mod views;

/// Backend error types
#[cfg(feature = "ssr")]
pub mod error;

/// Re-export commonly used types
#[cfg(feature = "ssr")]
pub use error::BackendError;
#[cfg(feature = "ssr")]
pub use routes::create_router;
#[cfg(feature = "ssr")]
pub use server::{create_app, AppState, Application};
#[cfg(feature = "ssr")]
pub use store::Database;
