//! Post repository
//!
//! One parameterized statement per operation, no transactions:
//! - list: full table scan, no ordering in SQL
//! - update/delete: report affected rows, zero is not an error

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{NewPost, Post, PostId};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence operations behind every post route (testable)
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, in whatever order the store returns them.
    async fn list(&self) -> Result<Vec<Post>, StoreError>;

    async fn get(&self, id: PostId) -> Result<Option<Post>, StoreError>;

    /// Insert a post and return the id the store assigned.
    async fn create(&self, post: NewPost) -> Result<PostId, StoreError>;

    /// Overwrite all text fields. Returns the number of rows touched.
    async fn update(&self, id: PostId, post: NewPost) -> Result<u64, StoreError>;

    /// Returns the number of rows removed.
    async fn delete(&self, id: PostId) -> Result<u64, StoreError>;
}

/// PostgreSQL-backed post store
#[derive(Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        let posts = sqlx::query_as::<_, Post>("SELECT id, title, description, author FROM posts")
            .fetch_all(&self.pool)
            .await?;

        Ok(posts)
    }

    async fn get(&self, id: PostId) -> Result<Option<Post>, StoreError> {
        let post = sqlx::query_as::<_, Post>(
            "SELECT id, title, description, author FROM posts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn create(&self, post: NewPost) -> Result<PostId, StoreError> {
        let id: PostId = sqlx::query_scalar(
            "INSERT INTO posts (title, description, author) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(post.title)
        .bind(post.description)
        .bind(post.author)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(&self, id: PostId, post: NewPost) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "UPDATE posts SET title = $1, description = $2, author = $3 WHERE id = $4",
        )
        .bind(post.title)
        .bind(post.description)
        .bind(post.author)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: PostId) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, schema};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p blog-server -- --ignored

    async fn store() -> PgPostStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let options = url.parse().expect("invalid DATABASE_URL");
        let pool = create_pool(options).await.expect("pool creation failed");
        schema::ensure(&pool).await.expect("schema bootstrap failed");
        PgPostStore::new(pool)
    }

    fn sample(tag: &str) -> NewPost {
        NewPost {
            title: format!("title {tag}"),
            description: format!("description {tag}"),
            author: format!("author {tag}"),
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_round_trips_fields() {
        let store = store().await;
        let id = store.create(sample("get")).await.expect("insert failed");

        let post = store.get(id).await.expect("select failed").expect("row missing");
        assert_eq!(post.id, id);
        assert_eq!(post.title, "title get");
        assert_eq!(post.description, "description get");
        assert_eq!(post.author, "author get");

        store.delete(id).await.expect("cleanup failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_and_delete_missing_rows_are_noops() {
        let store = store().await;
        let id = store.create(sample("gone")).await.expect("insert failed");
        assert_eq!(store.delete(id).await.expect("delete failed"), 1);

        assert_eq!(store.delete(id).await.expect("second delete failed"), 0);
        assert_eq!(store.update(id, sample("late")).await.expect("update failed"), 0);
        assert!(store.get(id).await.expect("select failed").is_none());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_includes_created_post_once() {
        let store = store().await;
        let id = store.create(sample("list")).await.expect("insert failed");

        let posts = store.list().await.expect("list failed");
        assert_eq!(posts.iter().filter(|p| p.id == id).count(), 1);

        store.delete(id).await.expect("cleanup failed");
    }
}
