/**
 * Authenticator
 *
 * Checks a username/password pair against the credential store.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Return the user's identity
 *
 * An unknown username still pays for one bcrypt verification, so the two
 * failure reasons take the same time. The reasons stay distinct for logging;
 * the login handler renders both the same way.
 */

use std::sync::Arc;

use thiserror::Error;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::users::UserStore;
use crate::backend::error::BackendError;
use crate::shared::Identity;

/// Why a login was rejected
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    #[error("Incorrect username")]
    UnknownUser,
    #[error("Incorrect password")]
    BadPassword,
}

/// Validates credentials against a `UserStore`
#[derive(Clone)]
pub struct Authenticator {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserStore>, hasher: PasswordHasher) -> Self {
        Self { users, hasher }
    }

    /// The hasher used for verification, shared with sign-up
    pub fn hasher(&self) -> &PasswordHasher {
        &self.hasher
    }

    /// Authenticate `username` with `password`
    ///
    /// # Errors
    ///
    /// * `BackendError::Auth(AuthFailure::UnknownUser)` - no such user
    /// * `BackendError::Auth(AuthFailure::BadPassword)` - password mismatch
    /// * `BackendError::Storage` - the lookup failed
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Identity, BackendError> {
        let username = username.trim();

        let Some(user) = self.users.get_user_by_username(username).await? else {
            self.hasher.verify_dummy(password).await;
            return Err(AuthFailure::UnknownUser.into());
        };

        if !self.hasher.verify(password, &user.password_hash).await {
            return Err(AuthFailure::BadPassword.into());
        }

        Ok(user.to_identity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::users::NewUser;
    use crate::backend::store::MemoryStore;
    use assert_matches::assert_matches;

    async fn authenticator_with_alice() -> (Authenticator, uuid::Uuid) {
        let store = Arc::new(MemoryStore::new());
        let hasher = PasswordHasher::new(4).unwrap();
        let password_hash = hasher.hash("secret123").await.unwrap();
        let user = store
            .create_user(NewUser::new("Alice", "Liddell", "alice", password_hash).unwrap())
            .await
            .unwrap();
        (Authenticator::new(store, hasher), user.id)
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let (auth, _) = authenticator_with_alice().await;
        let result = auth.authenticate("missing-user", "anything").await;
        assert_matches!(result, Err(BackendError::Auth(AuthFailure::UnknownUser)));
    }

    #[tokio::test]
    async fn test_bad_password() {
        let (auth, _) = authenticator_with_alice().await;
        let result = auth.authenticate("alice", "wrong").await;
        assert_matches!(result, Err(BackendError::Auth(AuthFailure::BadPassword)));
    }

    #[tokio::test]
    async fn test_success_returns_stored_id() {
        let (auth, user_id) = authenticator_with_alice().await;
        let identity = auth.authenticate("alice", "secret123").await.unwrap();
        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.username, "alice");
        assert!(!identity.is_admin);
    }

    #[tokio::test]
    async fn test_username_is_trimmed() {
        let (auth, user_id) = authenticator_with_alice().await;
        let identity = auth.authenticate("  alice ", "secret123").await.unwrap();
        assert_eq!(identity.user_id, user_id);
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(AuthFailure::UnknownUser.to_string(), "Incorrect username");
        assert_eq!(AuthFailure::BadPassword.to_string(), "Incorrect password");
    }
}
