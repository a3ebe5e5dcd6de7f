//! Backend Error Module
//!
//! This module defines the error type returned by HTTP handlers and its
//! conversion into a response.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! Handlers return `Result<_, BackendError>` and use `?` on store, hasher and
//! validation results; the `From` impls pick the variant. There is no retry:
//! a failed request renders the generic error page and the caller may resubmit.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
