//! Domain entities - the core business objects.

mod draft;
mod post;

pub use draft::{EditDraft, RowState};
pub use post::{Post, PostField, PostId, Views, next_id};
