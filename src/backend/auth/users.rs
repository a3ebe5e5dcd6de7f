/**
 * User Model and Credential Store
 *
 * This module defines the user record and the `UserStore` trait through which
 * handlers and the authenticator reach it. The PostgreSQL and in-memory
 * implementations live in `backend::store`.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::store::StoreError;
use crate::shared::error::{require_field, SharedError};
use crate::shared::Identity;

/// Longest accepted value for any name field
pub const MAX_NAME_LEN: usize = 60;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Login name, unique across users
    pub username: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Always false at creation; not used for access decisions
    pub is_admin: bool,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Profile snapshot stored in the session
    pub fn to_identity(&self) -> Identity {
        Identity {
            user_id: self.id,
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            is_admin: self.is_admin,
        }
    }
}

/// Input for creating a user
///
/// Holds an already computed hash, so the store never sees plaintext.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password_hash: String,
}

impl NewUser {
    /// Validate the profile fields and pair them with a password hash
    pub fn new(
        first_name: &str,
        last_name: &str,
        username: &str,
        password_hash: String,
    ) -> Result<Self, SharedError> {
        Ok(Self {
            first_name: require_field("first_name", first_name, MAX_NAME_LEN)?,
            last_name: require_field("last_name", last_name, MAX_NAME_LEN)?,
            username: require_field("username", username, MAX_NAME_LEN)?,
            password_hash,
        })
    }

    /// Materialize the stored record; `is_admin` is always false
    pub fn into_user(self) -> User {
        User {
            id: Uuid::new_v4(),
            first_name: self.first_name,
            last_name: self.last_name,
            username: self.username,
            password_hash: self.password_hash,
            is_admin: false,
            created_at: Utc::now(),
        }
    }
}

/// Persistence for user records
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user in a single atomic write.
    ///
    /// # Errors
    /// `StoreError::UsernameTaken` if the username already exists.
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// Get user by username
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_requires_username() {
        let err = NewUser::new("Alice", "Liddell", "  ", "hash".to_string()).unwrap_err();
        assert_eq!(err.field(), "username");
    }

    #[test]
    fn test_into_user_is_never_admin() {
        let user = NewUser::new("Alice", "Liddell", "alice", "hash".to_string())
            .unwrap()
            .into_user();
        assert!(!user.is_admin);
        assert_eq!(user.to_identity().user_id, user.id);
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = NewUser::new("Alice", "Liddell", "alice", "secret-hash".to_string())
            .unwrap()
            .into_user();
        let rendered = toml::to_string(&user).unwrap();
        assert!(!rendered.contains("secret-hash"));
    }
}
