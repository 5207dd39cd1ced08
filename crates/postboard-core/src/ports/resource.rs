use async_trait::async_trait;

use crate::domain::{Post, PostId};
use crate::error::RemoteError;

/// The remote collection resource holding posts.
///
/// Every call is a single request with no retry. Implementations map any
/// failure (transport, non-2xx, bad body) onto [`RemoteError`].
#[async_trait]
pub trait PostResource: Send + Sync {
    /// Fetch the whole collection, in server order.
    async fn list(&self) -> Result<Vec<Post>, RemoteError>;

    /// Create one record. The id is chosen by the caller.
    async fn create(&self, post: &Post) -> Result<(), RemoteError>;

    /// Replace the record at `id` with `post`.
    async fn replace(&self, id: PostId, post: &Post) -> Result<(), RemoteError>;

    /// Remove the record at `id`.
    async fn delete(&self, id: PostId) -> Result<(), RemoteError>;
}
