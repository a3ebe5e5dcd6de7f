//! Message Board Module
//!
//! Posts and the pages that list and create them.
//!
//! - **`db`** - the `PostStore` trait
//! - **`handlers`** - `/` and `/create-message`

/// Post store trait
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use db::PostStore;
pub use handlers::{create_message, create_message_form, index};
