//! The post list editor - local state kept in step with the remote
//! collection.
//!
//! Every remote operation is attempted once. On success the result is
//! mirrored into local state; on failure the error is logged, returned,
//! and local state stays as it was before the call.

mod inputs;


use std::sync::Arc;

use crate::domain::{EditDraft, Post, PostField, PostId, RowState, Views, next_id};
use crate::error::{EditorError, RemoteError};
use crate::ports::PostResource;

pub use inputs::Inputs;

/// State container for the post table: rows, input fields and the edit
/// slot.
pub struct PostListEditor {
    resource: Arc<dyn PostResource>,
    posts: Vec<Post>,
    inputs: Inputs,
    draft: EditDraft,
}

impl PostListEditor {
    pub fn new(resource: Arc<dyn PostResource>) -> Self {
        Self::with_posts(resource, Vec::new())
    }

    /// Start from an already known list, e.g. a previous load.
    pub fn with_posts(resource: Arc<dyn PostResource>, posts: Vec<Post>) -> Self {
        Self {
            resource,
            posts,
            inputs: Inputs::default(),
            draft: EditDraft::NoActiveEdit,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    pub fn draft(&self) -> &EditDraft {
        &self.draft
    }

    pub fn row_state(&self, id: PostId) -> Option<RowState> {
        self.posts.iter().find(|post| post.id == id).map(|_| {
            if self.draft.is_editing(id) {
                RowState::Editing
            } else {
                RowState::View
            }
        })
    }

    /// Replace the local list with the server's collection.
    pub async fn load_all(&mut self) -> Result<(), RemoteError> {
        match self.resource.list().await {
            Ok(posts) => {
                tracing::debug!(count = posts.len(), "Loaded posts");
                self.posts = posts;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load posts");
                Err(e)
            }
        }
    }

    /// Create a post with the next client-side id and append it locally.
    pub async fn create(
        &mut self,
        title: impl Into<String>,
        views: Views,
        image: Option<String>,
    ) -> Result<Post, EditorError> {
        let post = Post::new(self.next_id()?, title, views, image);
        self.push_created(post).await
    }

    /// The "Add" action: create from the current input fields.
    pub async fn submit_inputs(&mut self) -> Result<Post, EditorError> {
        let post = self.inputs.to_post(self.next_id()?);
        self.push_created(post).await
    }

    fn next_id(&self) -> Result<PostId, EditorError> {
        next_id(&self.posts).ok_or_else(|| {
            tracing::error!("Failed to create post: no id left");
            EditorError::IdsExhausted
        })
    }

    async fn push_created(&mut self, post: Post) -> Result<Post, EditorError> {
        if let Err(e) = self.resource.create(&post).await {
            tracing::error!(post_id = %post.id, error = %e, "Failed to create post");
            return Err(e.into());
        }

        tracing::info!(post_id = %post.id, "Post created");
        self.posts.push(post.clone());
        self.inputs.clear();
        Ok(post)
    }

    /// Replace the record matching `draft.id`, then leave edit mode.
    pub async fn update(&mut self, draft: Post) -> Result<(), RemoteError> {
        if let Err(e) = self.resource.replace(draft.id, &draft).await {
            tracing::error!(post_id = %draft.id, error = %e, "Failed to update post");
            return Err(e);
        }

        tracing::info!(post_id = %draft.id, "Post updated");
        match self.posts.iter_mut().find(|post| post.id == draft.id) {
            Some(slot) => *slot = draft,
            None => tracing::warn!(post_id = %draft.id, "Updated post is not in the local list"),
        }
        self.draft.clear();
        Ok(())
    }

    /// The "Save" action. Returns `false` without a remote call when
    /// nothing is being edited.
    pub async fn save_draft(&mut self) -> Result<bool, RemoteError> {
        let Some(draft) = self.draft.post().cloned() else {
            tracing::debug!("Save requested with no active edit");
            return Ok(false);
        };
        self.update(draft).await?;
        Ok(true)
    }

    /// Delete the record with `id` and drop it from the local list.
    pub async fn delete(&mut self, id: PostId) -> Result<(), RemoteError> {
        if let Err(e) = self.resource.delete(id).await {
            tracing::error!(post_id = %id, error = %e, "Failed to delete post");
            return Err(e);
        }

        tracing::info!(post_id = %id, "Post deleted");
        self.posts.retain(|post| post.id != id);
        if self.draft.is_editing(id) {
            self.draft.clear();
        }
        Ok(())
    }

    /// Put `post` into edit mode, abandoning any other draft.
    pub fn begin_edit(&mut self, post: &Post) {
        if let Some(previous) = self.draft.post().filter(|prev| prev.id != post.id) {
            tracing::debug!(post_id = %previous.id, "Discarding unsaved draft");
        }
        self.draft = EditDraft::Editing(post.clone());
    }

    pub fn begin_edit_by_id(&mut self, id: PostId) -> Result<(), EditorError> {
        let post = self
            .posts
            .iter()
            .find(|post| post.id == id)
            .cloned()
            .ok_or(EditorError::UnknownPost(id))?;
        self.begin_edit(&post);
        Ok(())
    }

    /// Merge one field into the active draft.
    pub fn edit_field(&mut self, field: PostField, value: &str) -> Result<(), EditorError> {
        let draft = self.draft.post_mut().ok_or(EditorError::NoActiveEdit)?;
        draft.apply(field, value);
        Ok(())
    }

    pub fn set_input(&mut self, field: PostField, value: impl Into<String>) {
        self.inputs.set(field, value);
    }
}
