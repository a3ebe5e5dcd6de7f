//! Members Only - Main Library
//!
//! A small message board where anyone can read the posts but only registered
//! members can write them.
//!
//! # Overview
//!
//! - Sign up with a first name, last name, username and password
//! - Log in to receive a server-side session held in an HttpOnly cookie
//! - Members create posts with a title and description
//! - Everyone sees the list of posts, newest first, with their authors
//!
//! # Module Structure
//!
//! - **`shared`** - Types independent of the server
//!   - Identity, post and configuration types
//!   - Validation errors
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, routing and HTML pages
//!   - Credential store, bcrypt hashing, sessions and the access guard
//!   - PostgreSQL and in-memory persistence
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend modules (on by default)
//!
//! # Usage
//!
//! ```rust,no_run
//! use members_only::backend::server::{create_app, load_config, shutdown_signal};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
//! let app = create_app(config).await?;
//! app.serve(listener, shutdown_signal()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` for input validation
//! - `backend::error::BackendError` for everything a handler can fail with,
//!   mapped to an HTTP status and an HTML error page

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
