/**
 * Post Data Structure
 *
 * This module defines the message board post, the validated input used to
 * create one, and the read model returned when listing posts with their
 * author resolved.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::{require_field, SharedError};
use crate::shared::identity::Author;

/// Maximum title length in characters
pub const MAX_TITLE_LEN: usize = 120;

/// Maximum description length in characters
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// A stored message board post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Creation time, assigned by the server
    pub date: DateTime<Utc>,
    /// Id of the user who was authenticated when the post was written
    pub author_id: Uuid,
}

/// A post together with its author, as listed on the home page
///
/// `author` is `None` when the author reference no longer resolves to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: Option<Author>,
}

/// Validated input for creating a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub description: String,
    pub author_id: Uuid,
}

impl NewPost {
    /// Validate and trim the submitted fields
    ///
    /// # Errors
    /// `SharedError::ValidationError` naming the first field that is blank
    /// or too long.
    pub fn new(title: &str, description: &str, author_id: Uuid) -> Result<Self, SharedError> {
        Ok(Self {
            title: require_field("title", title, MAX_TITLE_LEN)?,
            description: require_field("description", description, MAX_DESCRIPTION_LEN)?,
            author_id,
        })
    }

    /// Turn this input into a stored post stamped with the current time
    pub fn into_post(self) -> Post {
        Post {
            id: Uuid::new_v4(),
            title: self.title,
            description: self.description,
            date: Utc::now(),
            author_id: self.author_id,
        }
    }
}
