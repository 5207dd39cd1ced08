//! In-memory post collection - backs the development server and tests.
//!
//! Behaves like a json-server collection: records keep insertion order,
//! ids are whatever the client sent, and operations on a missing id fail.
//! Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::RemoteError;
use postboard_core::domain::{Post, PostId};
use postboard_core::ports::PostResource;

/// In-memory collection using an ordered Vec behind an async RwLock.
pub struct InMemoryPostResource {
    store: RwLock<Vec<Post>>,
}

impl InMemoryPostResource {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Seed the collection.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            store: RwLock::new(posts),
        }
    }

    /// Copy of the current collection.
    pub async fn snapshot(&self) -> Vec<Post> {
        self.store.read().await.clone()
    }

    pub async fn get(&self, id: PostId) -> Option<Post> {
        let store = self.store.read().await;
        store.iter().find(|post| post.id == id).cloned()
    }
}

impl Default for InMemoryPostResource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostResource for InMemoryPostResource {
    async fn list(&self) -> Result<Vec<Post>, RemoteError> {
        Ok(self.snapshot().await)
    }

    async fn create(&self, post: &Post) -> Result<(), RemoteError> {
        let mut store = self.store.write().await;

        if store.iter().any(|existing| existing.id == post.id) {
            tracing::debug!(post_id = %post.id, "Rejected duplicate id");
            return Err(RemoteError::Conflict(post.id));
        }

        store.push(post.clone());
        Ok(())
    }

    async fn replace(&self, id: PostId, post: &Post) -> Result<(), RemoteError> {
        let mut store = self.store.write().await;
        let slot = store
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or(RemoteError::NotFound(id))?;

        // The path id wins over whatever the body carried.
        *slot = Post {
            id,
            ..post.clone()
        };
        Ok(())
    }

    async fn delete(&self, id: PostId) -> Result<(), RemoteError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|post| post.id != id);

        if store.len() == before {
            return Err(RemoteError::NotFound(id));
        }

        Ok(())
    }
}
