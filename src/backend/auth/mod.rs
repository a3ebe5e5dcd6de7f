//! Authentication Module
//!
//! This module handles credential storage, password hashing, login and
//! server-side sessions.
//!
//! # Architecture
//!
//! - **`users`** - User record and the `UserStore` trait
//! - **`password`** - bcrypt hashing and verification
//! - **`authenticator`** - username/password checking against the store
//! - **`sessions`** - opaque session tokens mapped to identities
//! - **`cookies`** - the session cookie
//! - **`handlers`** - HTTP handlers for the account pages
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs           - Module exports and documentation
//! ├── users.rs         - User model and store trait
//! ├── password.rs      - Password hasher
//! ├── authenticator.rs - Credential checking
//! ├── sessions.rs      - Session manager
//! ├── cookies.rs       - Session cookie helpers
//! └── handlers/        - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Sign up**: form → password hashed → user stored → redirect to `/`
//! 2. **Login**: form → user looked up → password verified → session created,
//!    cookie set → redirect to `/`
//! 3. **Later requests**: cookie → session resolved → identity attached to the
//!    request (see `backend::middleware::auth`)
//! 4. **Logout**: session destroyed, cookie cleared
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Unknown users and wrong passwords take the same time and get the same
//!   response
//! - Session tokens are random, server-side and expire

/// User data model and store trait
pub mod users;

/// Password hashing
pub mod password;

/// Credential checking
pub mod authenticator;

/// Session management
pub mod sessions;

/// Session cookie helpers
pub mod cookies;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use authenticator::{AuthFailure, Authenticator};
pub use handlers::{login, login_form, logout, sign_up, sign_up_form};
pub use password::{HashError, PasswordHasher};
pub use sessions::{SessionManager, SessionToken};
pub use users::{NewUser, User, UserStore};
