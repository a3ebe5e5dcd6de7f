/**
 * Identity Types
 *
 * The authenticated user's id and minimal profile, as attached to a session
 * and to the request context, plus the author summary shown next to posts.
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated user attached to a session
///
/// This is a snapshot of the profile fields taken at login. User records are
/// never updated, so the snapshot stays accurate for the session lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Id of the referenced user record
    pub user_id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Stored but not consulted for any access decision
    pub is_admin: bool,
}

impl Identity {
    /// First and last name joined by a space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Author of a post, resolved at read time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<&Identity> for Author {
    fn from(identity: &Identity) -> Self {
        Self {
            username: identity.username.clone(),
            first_name: identity.first_name.clone(),
            last_name: identity.last_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let identity = Identity {
            user_id: Uuid::new_v4(),
            username: "alice".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Liddell".to_string(),
            is_admin: false,
        };
        assert_eq!(identity.full_name(), "Alice Liddell");
        assert_eq!(Author::from(&identity).full_name(), "Alice Liddell");
    }
}
