/**
 * Password Hashing
 *
 * bcrypt hashing and verification. Each hash embeds its own random salt and
 * the configured cost. The async methods move the work onto tokio's blocking
 * pool so a login never stalls other requests on the same worker.
 *
 * bcrypt only reads the first 72 bytes of its input. Longer passwords are
 * refused outright instead of being cut short, so two passwords sharing a
 * 72-byte prefix never verify against each other.
 */

use bcrypt::{non_truncating_hash, non_truncating_verify};
use std::sync::Arc;
use thiserror::Error;

/// Longest password bcrypt consumes in full; its 72-byte input includes a
/// trailing NUL
pub const MAX_PASSWORD_BYTES: usize = 71;

/// Input for the placeholder hash used when the username is unknown
const DUMMY_PASSWORD: &str = "members-only-timing-equalizer";

/// Errors raised while hashing a password
#[derive(Debug, Error)]
pub enum HashError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Hash a password with bcrypt at the given cost.
///
/// Fails with `BcryptError::Truncation` for passwords over
/// `MAX_PASSWORD_BYTES`.
pub fn hash_password(password: &str, cost: u32) -> Result<String, HashError> {
    Ok(non_truncating_hash(password, cost)?)
}

/// Verify a password against a bcrypt hash.
///
/// A malformed hash or an over-long password counts as a mismatch.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    non_truncating_verify(password, password_hash).unwrap_or_else(|e| {
        tracing::warn!("Password verification error: {:?}", e);
        false
    })
}

/// Salted one-way hashing with a tunable work factor
#[derive(Clone)]
pub struct PasswordHasher {
    cost: u32,
    dummy_hash: Arc<str>,
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost.
    ///
    /// Computes one hash up front for `verify_dummy`, so construction costs one
    /// hash at `cost`.
    pub fn new(cost: u32) -> Result<Self, HashError> {
        let dummy_hash = hash_password(DUMMY_PASSWORD, cost)?;
        Ok(Self {
            cost,
            dummy_hash: dummy_hash.into(),
        })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Produce a freshly salted hash of `plaintext`
    pub async fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || hash_password(&plaintext, cost)).await?
    }

    /// Check `plaintext` against `password_hash`; never fails
    pub async fn verify(&self, plaintext: &str, password_hash: &str) -> bool {
        let plaintext = plaintext.to_owned();
        let password_hash = password_hash.to_owned();
        tokio::task::spawn_blocking(move || verify_password(&plaintext, &password_hash))
            .await
            .unwrap_or_else(|e| {
                tracing::error!("Password verification task failed: {:?}", e);
                false
            })
    }

    /// Spend the same work as a real verification, then report a mismatch
    pub async fn verify_dummy(&self, plaintext: &str) -> bool {
        let dummy = self.dummy_hash.clone();
        let _ = self.verify(plaintext, &dummy).await;
        false
    }
}
