use crate::domain::{Post, PostField, PostId, Views};

/// Text typed into the "new post" fields, held verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    pub title: String,
    pub views: String,
    pub image: String,
}

impl Inputs {
    pub fn set(&mut self, field: PostField, value: impl Into<String>) {
        let value = value.into();
        match field {
            PostField::Title => self.title = value,
            PostField::Views => self.views = value,
            PostField::Image => self.image = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Inputs::default();
    }

    /// Build the post these inputs describe. An empty image means none.
    pub fn to_post(&self, id: PostId) -> Post {
        Post::new(
            id,
            self.title.clone(),
            Views::from_input(&self.views),
            Some(self.image.clone()),
        )
    }
}
