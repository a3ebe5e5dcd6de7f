//! Server Module
//!
//! This module contains all server-side code for initializing and configuring
//! the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Configuration and datastore loading
//! - **`init`** - Server initialization, serving and shutdown
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading (file, environment, database)
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: defaults, `BOARD_CONFIG` file, environment
//! 2. **Datastore**: PostgreSQL when `DATABASE_URL` is set, otherwise in-memory
//! 3. **State Creation**: hasher, authenticator and session manager
//! 4. **Background Tasks**: the expired-session sweeper
//! 5. **Router Creation**: routes, session middleware and static files

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{load_config, load_database};
pub use init::{create_app, shutdown_signal, Application};
pub use state::AppState;
