//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! ├── board_routes.rs - Home page and message creation
//! └── auth_routes.rs  - Sign-up, login, logout
//! ```
//!
//! # Route Order
//!
//! 1. **Board Routes** - `/`, `/create-message`, `/health`
//! 2. **Account Routes** - `/sign-up`, `/login`, `/logout`
//! 3. **Static Files** - any other path is looked up in `static_dir`
//!
//! The session middleware wraps everything, so every handler sees the
//! resolved identity.

/// Main router creation
pub mod router;

/// Board routes
pub mod board_routes;

/// Account routes
pub mod auth_routes;

// Re-export commonly used functions
pub use router::create_router;
