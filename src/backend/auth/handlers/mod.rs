//! Authentication Handlers Module
//!
//! HTTP handlers for the account pages.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Form bodies
//! ├── signup.rs   - GET/POST /sign-up
//! ├── login.rs    - GET/POST /login
//! └── logout.rs   - GET /logout
//! ```

/// Form bodies
pub mod types;

/// Sign-up handlers
pub mod signup;

/// Login handlers
pub mod login;

/// Logout handler
pub mod logout;

// Re-export commonly used types
pub use types::{LoginForm, SignupForm};

// Re-export handlers
pub use login::{login, login_form};
pub use logout::logout;
pub use signup::{sign_up, sign_up_form};
