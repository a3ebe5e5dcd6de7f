//! Shared Module
//!
//! This module contains types that do not depend on the server stack: the
//! identity attached to a session, posts and their validation, configuration,
//! and shared error types. The backend builds on these; they compile without
//! the `ssr` feature.

/// Identity and author types
pub mod identity;

/// Message board posts
pub mod post;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use identity::{Author, Identity};
pub use post::{NewPost, Post, PostWithAuthor};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError, SessionConfig};
