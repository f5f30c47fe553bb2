//! In-memory post repository - used when no database is configured, and in tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use feedline_core::RepoError;
use feedline_core::domain::{self, Post, Record};
use feedline_core::ports::{BaseRepository, PostRepository};

struct Store {
    posts: BTreeMap<i64, Post>,
    next_id: i64,
}

/// In-memory post store using a `BTreeMap` behind an async RwLock.
///
/// IDs start at 1 and are never reused. Every operation holds the lock for
/// its whole duration, so a save or delete cannot interleave with another.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                posts: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, i64> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.values().cloned().collect())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.contains_key(&id))
    }

    async fn save(&self, mut post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let now = domain::now();

        match post.id {
            None => {
                let id = store.next_id;
                store.next_id += 1;

                post.id = Some(id);
                post.on_create(now);
                store.posts.insert(id, post.clone());
                tracing::debug!(post_id = id, "Inserted post");
            }
            Some(id) => {
                let stored = store.posts.get_mut(&id).ok_or(RepoError::NotFound)?;

                post.created_date = stored.created_date;
                post.on_update(now);
                *stored = post.clone();
                tracing::debug!(post_id = id, "Updated post");
            }
        }

        Ok(post)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        if store.posts.remove(&id).is_none() {
            tracing::debug!(post_id = id, "No post to delete");
        }
        Ok(())
    }
}

impl PostRepository for InMemoryPostRepository {}
