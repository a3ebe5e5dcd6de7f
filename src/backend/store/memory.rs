/**
 * In-Memory Store
 *
 * A process-local implementation of `UserStore` and `PostStore`. All data sits
 * behind one `RwLock`, so each insert (including the username uniqueness
 * check) is a single critical section.
 */

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::{NewUser, User, UserStore};
use crate::backend::board::db::PostStore;
use crate::backend::store::StoreError;
use crate::shared::{Author, NewPost, Post, PostWithAuthor};

#[derive(Default)]
struct MemoryData {
    users: HashMap<Uuid, User>,
    /// username -> user id
    usernames: HashMap<String, Uuid>,
    posts: Vec<Post>,
}

/// Users and posts kept in process memory
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<MemoryData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut data = self.data.write().await;
        if data.usernames.contains_key(&new_user.username) {
            return Err(StoreError::UsernameTaken(new_user.username));
        }
        let user = new_user.into_user();
        data.usernames.insert(user.username.clone(), user.id);
        data.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let data = self.data.read().await;
        Ok(data
            .usernames
            .get(username)
            .and_then(|id| data.users.get(id))
            .cloned())
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn create_post(&self, new_post: NewPost) -> Result<Post, StoreError> {
        let post = new_post.into_post();
        self.data.write().await.posts.push(post.clone());
        Ok(post)
    }

    async fn list_posts_with_authors(&self) -> Result<Vec<PostWithAuthor>, StoreError> {
        let data = self.data.read().await;
        let mut posts: Vec<PostWithAuthor> = data
            .posts
            .iter()
            .map(|post| PostWithAuthor {
                post: post.clone(),
                author: data.users.get(&post.author_id).map(|user| Author {
                    username: user.username.clone(),
                    first_name: user.first_name.clone(),
                    last_name: user.last_name.clone(),
                }),
            })
            .collect();
        // Stable sort keeps insertion order for equal timestamps; reverse gives newest first.
        posts.sort_by(|a, b| a.post.date.cmp(&b.post.date));
        posts.reverse();
        Ok(posts)
    }
}
