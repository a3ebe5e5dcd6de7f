/**
 * Post Store
 *
 * Persistence for message board posts. Posts are listed newest first with
 * their author resolved against the user records at read time.
 */

use async_trait::async_trait;

use crate::backend::store::StoreError;
use crate::shared::{NewPost, Post, PostWithAuthor};

/// Persistence for posts
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Save a new post
    async fn create_post(&self, new_post: NewPost) -> Result<Post, StoreError>;

    /// Load all posts, newest first, each with its author resolved
    async fn list_posts_with_authors(&self) -> Result<Vec<PostWithAuthor>, StoreError>;
}
