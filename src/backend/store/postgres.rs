/**
 * PostgreSQL Store
 *
 * `sqlx` implementation of `UserStore` and `PostStore`. The schema lives in
 * `migrations/`; the unique index on `users.username` backs the
 * `UsernameTaken` error.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::users::{NewUser, User, UserStore};
use crate::backend::board::db::PostStore;
use crate::backend::store::StoreError;
use crate::shared::{Author, NewPost, Post, PostWithAuthor};

/// Store backed by a PostgreSQL connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply pending migrations from `migrations/`
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!().run(&self.pool).await?;
        Ok(())
    }
}

/// Map a unique violation on insert to `UsernameTaken`
fn map_insert_error(err: sqlx::Error, username: &str) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return StoreError::UsernameTaken(username.to_string());
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl UserStore for PgStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let candidate = new_user.into_user();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, first_name, last_name, username, password_hash, is_admin, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, first_name, last_name, username, password_hash, is_admin, created_at
            "#
        )
        .bind(candidate.id)
        .bind(&candidate.first_name)
        .bind(&candidate.last_name)
        .bind(&candidate.username)
        .bind(&candidate.password_hash)
        .bind(candidate.is_admin)
        .bind(candidate.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, &candidate.username))?;

        Ok(user)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, username, password_hash, is_admin, created_at
            FROM users
            WHERE username = $1
            "#
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

#[async_trait]
impl PostStore for PgStore {
    async fn create_post(&self, new_post: NewPost) -> Result<Post, StoreError> {
        let post = new_post.into_post();

        sqlx::query(
            r#"
            INSERT INTO posts (id, title, description, date, author_id)
            VALUES ($1, $2, $3, $4, $5)
            "#
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.description)
        .bind(post.date)
        .bind(post.author_id)
        .execute(&self.pool)
        .await?;

        Ok(post)
    }

    async fn list_posts_with_authors(&self) -> Result<Vec<PostWithAuthor>, StoreError> {
        #[derive(sqlx::FromRow)]
        struct PostRow {
            id: Uuid,
            title: String,
            description: String,
            date: DateTime<Utc>,
            author_id: Uuid,
            username: Option<String>,
            first_name: Option<String>,
            last_name: Option<String>,
        }

        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT p.id, p.title, p.description, p.date, p.author_id,
                   u.username, u.first_name, u.last_name
            FROM posts p
            LEFT JOIN users u ON u.id = p.author_id
            ORDER BY p.date DESC
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        let posts = rows
            .into_iter()
            .map(|row| {
                let author = match (row.username, row.first_name, row.last_name) {
                    (Some(username), Some(first_name), Some(last_name)) => Some(Author {
                        username,
                        first_name,
                        last_name,
                    }),
                    _ => None,
                };
                PostWithAuthor {
                    post: Post {
                        id: row.id,
                        title: row.title,
                        description: row.description,
                        date: row.date,
                        author_id: row.author_id,
                    },
                    author,
                }
            })
            .collect();

        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::error::Error as StdError;

    #[derive(Debug, thiserror::Error)]
    #[error("{message}")]
    struct FakeDbError {
        message: &'static str,
        unique: bool,
    }

    impl DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            self.message
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            if self.unique {
                ErrorKind::UniqueViolation
            } else {
                ErrorKind::Other
            }
        }
    }

    fn db_error(unique: bool) -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakeDbError {
            message: "constraint failed",
            unique,
        }))
    }

    #[test]
    fn test_unique_violation_is_username_taken() {
        let err = map_insert_error(db_error(true), "alice");
        assert_matches!(err, StoreError::UsernameTaken(name) if name == "alice");
    }

    #[test]
    fn test_other_constraint_stays_database_error() {
        let err = map_insert_error(db_error(false), "alice");
        assert_matches!(err, StoreError::Database(sqlx::Error::Database(_)));

        let err = map_insert_error(sqlx::Error::PoolTimedOut, "alice");
        assert_matches!(err, StoreError::Database(sqlx::Error::PoolTimedOut));
    }

    /// Needs a disposable PostgreSQL database in `DATABASE_URL`
    #[tokio::test]
    #[ignore]
    async fn test_round_trip_against_postgres() {
        let url = std::env::var("DATABASE_URL").unwrap();
        let store = PgStore::new(PgPool::connect(&url).await.unwrap());
        store.migrate().await.unwrap();

        let username = format!("pg-{}", Uuid::new_v4().simple());
        let new_user = NewUser::new("Alice", "Liddell", &username, "hash".to_string()).unwrap();
        let user = store.create_user(new_user.clone()).await.unwrap();
        assert!(!user.is_admin);

        let found = store.get_user_by_username(&username).await.unwrap().unwrap();
        assert_eq!(found.id, user.id);

        let err = store.create_user(new_user).await.unwrap_err();
        assert_matches!(err, StoreError::UsernameTaken(name) if name == username);

        let post = store
            .create_post(NewPost::new("Hello", "from postgres", user.id).unwrap())
            .await
            .unwrap();
        let listed = store.list_posts_with_authors().await.unwrap();
        let entry = listed.iter().find(|p| p.post.id == post.id).unwrap();
        assert_eq!(entry.author.as_ref().unwrap().username, username);
    }
}
