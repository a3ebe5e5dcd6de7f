/**
 * Authentication Handler Types
 *
 * The form bodies posted by the sign-up and login pages. Fields default to
 * empty so a missing field is reported by validation (400) rather than by the
 * form extractor.
 */

use serde::Deserialize;

use crate::backend::auth::password::MAX_PASSWORD_BYTES;
use crate::backend::auth::users::MAX_NAME_LEN;
use crate::shared::error::{require_field, SharedError};

/// Sign up form
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    /// Plaintext; hashed before anything is stored
    pub password: String,
}

impl SignupForm {
    /// Check every field before any hashing work is spent
    pub fn validate(&self) -> Result<(), SharedError> {
        require_field("first_name", &self.first_name, MAX_NAME_LEN)?;
        require_field("last_name", &self.last_name, MAX_NAME_LEN)?;
        require_field("username", &self.username, MAX_NAME_LEN)?;
        if self.password.is_empty() {
            return Err(SharedError::validation("password", "password is required"));
        }
        if self.password.len() > MAX_PASSWORD_BYTES {
            return Err(SharedError::validation(
                "password",
                format!("password must be at most {} bytes", MAX_PASSWORD_BYTES),
            ));
        }
        Ok(())
    }
}

/// Login form
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}
