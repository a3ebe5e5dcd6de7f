/**
 * Session Management
 *
 * Server-side sessions keyed by an opaque random token. The token travels in
 * the session cookie; the identity it maps to never leaves the server.
 *
 * Deadlines use `tokio::time::Instant`, so expiry follows the tokio clock and
 * can be driven from tests with a paused runtime.
 */

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use rand::distr::Alphanumeric;
use rand::{rng, Rng};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::shared::{Identity, SessionConfig};

/// Length of a session token in characters
pub const TOKEN_LEN: usize = 48;

/// Opaque session identifier handed to the client
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generate a cryptographically random token
    fn generate() -> Self {
        let token: String = rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect();
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens are credentials; keep them out of logs.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

/// A live session
#[derive(Debug, Clone)]
struct Session {
    identity: Identity,
    expires_at: Instant,
}

/// Issues, resolves and destroys sessions
///
/// All operations go through one lock, so for any token they are observed in
/// the order they were submitted. Cloning shares the same store.
#[derive(Clone)]
pub struct SessionManager {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    max_age: Duration,
    sliding: bool,
}

impl SessionManager {
    pub fn new(max_age: Duration, sliding: bool) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_age,
            sliding,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(Duration::from_secs(config.max_age_secs), config.sliding)
    }

    /// Configured session lifetime
    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    /// Start a session for `identity`
    pub async fn create(&self, identity: Identity) -> SessionToken {
        let token = SessionToken::generate();
        let session = Session {
            identity,
            expires_at: Instant::now() + self.max_age,
        };
        self.sessions
            .write()
            .await
            .insert(token.as_str().to_string(), session);
        token
    }

    /// Look up the identity for `token`
    ///
    /// Returns `None` for unknown or expired tokens; expired entries are
    /// removed on the way out.
    pub async fn resolve(&self, token: &str) -> Option<Identity> {
        let now = Instant::now();

        if !self.sliding {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                Some(session) if session.expires_at > now => {
                    return Some(session.identity.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }

        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(token) {
            Some(session) if session.expires_at > now => {
                if self.sliding {
                    session.expires_at = now + self.max_age;
                }
                return Some(session.identity.clone());
            }
            Some(_) => {}
            None => return None,
        }

        sessions.remove(token);
        tracing::debug!("Session expired");
        None
    }

    /// End the session for `token`; a no-op for unknown tokens
    ///
    /// Returns whether a session was removed.
    pub async fn destroy(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }

    /// Drop every expired session, returning how many were removed
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.expires_at > now);
        before - sessions.len()
    }

    /// Number of stored sessions, expired ones included until purged
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Spawn a task that purges expired sessions every `every`
    pub fn spawn_sweeper(&self, every: Duration) -> JoinHandle<()> {
        let manager = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                let purged = manager.purge_expired().await;
                if purged > 0 {
                    tracing::debug!("Purged {} expired sessions", purged);
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn alice() -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            username: "alice".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Liddell".to_string(),
            is_admin: false,
        }
    }

    #[tokio::test]
    async fn test_create_then_resolve() {
        let sessions = SessionManager::new(Duration::from_secs(60), false);
        let identity = alice();
        let token = sessions.create(identity.clone()).await;
        assert_eq!(token.as_str().len(), TOKEN_LEN);
        assert_eq!(sessions.resolve(token.as_str()).await, Some(identity));
    }

    #[tokio::test]
    async fn test_tokens_are_unique() {
        let sessions = SessionManager::new(Duration::from_secs(60), false);
        let identity = alice();
        let a = sessions.create(identity.clone()).await;
        let b = sessions.create(identity).await;
        assert_ne!(a, b);
        assert_eq!(sessions.len().await, 2);
    }

    #[tokio::test]
    async fn test_destroy_invalidates() {
        let sessions = SessionManager::new(Duration::from_secs(60), false);
        let token = sessions.create(alice()).await;
        assert!(sessions.destroy(token.as_str()).await);
        assert_eq!(sessions.resolve(token.as_str()).await, None);
    }

    #[tokio::test]
    async fn test_destroy_is_idempotent() {
        let sessions = SessionManager::new(Duration::from_secs(60), false);
        let token = sessions.create(alice()).await;
        assert!(sessions.destroy(token.as_str()).await);
        assert!(!sessions.destroy(token.as_str()).await);
        assert!(!sessions.destroy("never-issued").await);
    }

    #[tokio::test]
    async fn test_unknown_token_is_anonymous() {
        let sessions = SessionManager::new(Duration::from_secs(60), false);
        assert_eq!(sessions.resolve("nope").await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_expires() {
        let sessions = SessionManager::new(Duration::from_secs(100), false);
        let token = sessions.create(alice()).await;

        tokio::time::advance(Duration::from_secs(99)).await;
        assert!(sessions.resolve(token.as_str()).await.is_some());

        tokio::time::advance(Duration::from_secs(2)).await;
        assert_eq!(sessions.resolve(token.as_str()).await, None);
        assert!(sessions.is_empty().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fixed_window_does_not_slide() {
        let sessions = SessionManager::new(Duration::from_secs(100), false);
        let token = sessions.create(alice()).await;

        for _ in 0..3 {
            tokio::time::advance(Duration::from_secs(40)).await;
            let _ = sessions.resolve(token.as_str()).await;
        }
        assert_eq!(sessions.resolve(token.as_str()).await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sliding_window_extends_on_activity() {
        let sessions = SessionManager::new(Duration::from_secs(100), true);
        let token = sessions.create(alice()).await;

        for _ in 0..5 {
            tokio::time::advance(Duration::from_secs(60)).await;
            assert!(sessions.resolve(token.as_str()).await.is_some());
        }

        tokio::time::advance(Duration::from_secs(101)).await;
        assert_eq!(sessions.resolve(token.as_str()).await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_purge_expired() {
        let sessions = SessionManager::new(Duration::from_secs(10), false);
        sessions.create(alice()).await;
        tokio::time::advance(Duration::from_secs(5)).await;
        let fresh = sessions.create(alice()).await;
        tokio::time::advance(Duration::from_secs(6)).await;

        assert_eq!(sessions.purge_expired().await, 1);
        assert_eq!(sessions.len().await, 1);
        assert!(sessions.resolve(fresh.as_str()).await.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_purges_in_background() {
        let sessions = SessionManager::new(Duration::from_secs(10), false);
        sessions.create(alice()).await;
        let sweeper = sessions.spawn_sweeper(Duration::from_secs(30));

        tokio::time::sleep(Duration::from_secs(31)).await;
        assert!(sessions.is_empty().await);
        sweeper.abort();
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = SessionToken("abc".to_string());
        assert_eq!(format!("{:?}", token), "SessionToken(..)");
    }
}
