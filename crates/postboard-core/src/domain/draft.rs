use super::post::{Post, PostId};

/// The single edit slot.
///
/// At most one row is editable at a time. Starting an edit on another row
/// replaces the snapshot, dropping unsaved changes.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditDraft {
    #[default]
    NoActiveEdit,
    Editing(Post),
}

impl EditDraft {
    pub fn post(&self) -> Option<&Post> {
        match self {
            EditDraft::NoActiveEdit => None,
            EditDraft::Editing(post) => Some(post),
        }
    }

    pub fn post_mut(&mut self) -> Option<&mut Post> {
        match self {
            EditDraft::NoActiveEdit => None,
            EditDraft::Editing(post) => Some(post),
        }
    }

    /// Whether the row with `id` is the one being edited.
    pub fn is_editing(&self, id: PostId) -> bool {
        self.post().is_some_and(|post| post.id == id)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, EditDraft::Editing(_))
    }

    pub fn clear(&mut self) {
        *self = EditDraft::NoActiveEdit;
    }
}

/// Display state of a row still present in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    View,
    Editing,
}
