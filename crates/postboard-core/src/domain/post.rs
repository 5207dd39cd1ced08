use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::EditorError;

/// Identity of a post. Assigned client-side, see [`next_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(PostId)
    }
}

impl From<u64> for PostId {
    fn from(id: u64) -> Self {
        PostId(id)
    }
}

/// View count exactly as entered.
///
/// Input is not validated, so anything that does not read as a number is
/// kept as text and sent as a JSON string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Views {
    Number(serde_json::Number),
    Text(String),
}

impl Views {
    /// Interpret raw input text.
    pub fn from_input(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return Views::Number(n.into());
        }
        if let Ok(n) = trimmed.parse::<u64>() {
            return Views::Number(n.into());
        }
        if let Some(n) = trimmed
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
        {
            return Views::Number(n);
        }
        Views::Text(raw.to_string())
    }
}

impl Default for Views {
    fn default() -> Self {
        Views::Text(String::new())
    }
}

impl From<i64> for Views {
    fn from(n: i64) -> Self {
        Views::Number(n.into())
    }
}

impl fmt::Display for Views {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Views::Number(n) => write!(f, "{n}"),
            Views::Text(s) => f.write_str(s),
        }
    }
}

/// Post entity - one row of the remote collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub views: Views,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A `null` field reads the same as a missing one.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Post {
    /// Create a new post.
    pub fn new(id: PostId, title: impl Into<String>, views: Views, image: Option<String>) -> Self {
        Self {
            id,
            title: title.into(),
            views,
            image: image.filter(|url| !url.is_empty()),
        }
    }

    /// Overwrite a single field with raw input, leaving the others alone.
    pub fn apply(&mut self, field: PostField, value: &str) {
        match field {
            PostField::Title => self.title = value.to_string(),
            PostField::Views => self.views = Views::from_input(value),
            PostField::Image => {
                self.image = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            }
        }
    }
}

/// Editable fields of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostField {
    Title,
    Views,
    Image,
}

impl FromStr for PostField {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "title" => Ok(PostField::Title),
            "views" => Ok(PostField::Views),
            "image" => Ok(PostField::Image),
            other => Err(EditorError::UnknownField(other.to_string())),
        }
    }
}

/// Next client-side id: one past the largest id present, or 1.
///
/// `None` once the largest id is `u64::MAX`. Two writers working from the
/// same snapshot will pick the same id.
pub fn next_id(posts: &[Post]) -> Option<PostId> {
    match posts.iter().map(|post| post.id.0).max() {
        Some(max) => max.checked_add(1).map(PostId),
        None => Some(PostId(1)),
    }
}
