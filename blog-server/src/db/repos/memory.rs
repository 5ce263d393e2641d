//! In-process post store
//!
//! Stands in for PostgreSQL in tests and in `blog serve --memory`.
//! Ids come from a counter and are never handed out twice.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::posts::{PostStore, StoreError};
use crate::models::{NewPost, Post, PostId};

#[derive(Default)]
struct Inner {
    last_id: i32,
    posts: BTreeMap<PostId, Post>,
}

/// Post store held in memory
pub struct MemoryPostStore {
    inner: RwLock<Inner>,
    available: AtomicBool,
}

impl Default for MemoryPostStore {
    fn default() -> Self {
        Self {
            inner: RwLock::default(),
            available: AtomicBool::new(true),
        }
    }
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate an outage: while unavailable every call fails.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("memory store switched off".into()))
        }
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        self.check()?;
        let inner = self.inner.read().await;
        Ok(inner.posts.values().cloned().collect())
    }

    async fn get(&self, id: PostId) -> Result<Option<Post>, StoreError> {
        self.check()?;
        let inner = self.inner.read().await;
        Ok(inner.posts.get(&id).cloned())
    }

    async fn create(&self, post: NewPost) -> Result<PostId, StoreError> {
        self.check()?;
        let mut inner = self.inner.write().await;
        inner.last_id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Unavailable("post id space exhausted".into()))?;
        let id = PostId::new(inner.last_id);

        inner.posts.insert(
            id,
            Post {
                id,
                title: post.title,
                description: post.description,
                author: post.author,
            },
        );
        Ok(id)
    }

    async fn update(&self, id: PostId, post: NewPost) -> Result<u64, StoreError> {
        self.check()?;
        let mut inner = self.inner.write().await;
        match inner.posts.get_mut(&id) {
            Some(existing) => {
                existing.title = post.title;
                existing.description = post.description;
                existing.author = post.author;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: PostId) -> Result<u64, StoreError> {
        self.check()?;
        let mut inner = self.inner.write().await;
        Ok(inner.posts.remove(&id).map_or(0, |_| 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str) -> NewPost {
        NewPost {
            title: title.into(),
            description: "B".into(),
            author: "C".into(),
        }
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryPostStore::new();
        let first = store.create(post("one")).await.unwrap();
        assert_eq!(store.delete(first).await.unwrap(), 1);

        let second = store.create(post("two")).await.unwrap();
        assert_ne!(first, second);
        assert!(store.get(first).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_overwrites_all_fields() {
        let store = MemoryPostStore::new();
        let id = store.create(post("old")).await.unwrap();

        let changed = NewPost {
            title: "new".into(),
            description: "new desc".into(),
            author: "new author".into(),
        };
        assert_eq!(store.update(id, changed).await.unwrap(), 1);

        let stored = store.get(id).await.unwrap().unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.title, "new");
        assert_eq!(stored.description, "new desc");
        assert_eq!(stored.author, "new author");
    }

    #[tokio::test]
    async fn missing_rows_are_noops() {
        let store = MemoryPostStore::new();
        let ghost = PostId::new(7);
        assert_eq!(store.update(ghost, post("x")).await.unwrap(), 0);
        assert_eq!(store.delete(ghost).await.unwrap(), 0);
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_call() {
        let store = MemoryPostStore::new();
        store.set_available(false);
        assert!(store.list().await.is_err());
        assert!(store.create(post("x")).await.is_err());

        store.set_available(true);
        assert!(store.list().await.is_ok());
    }
}
