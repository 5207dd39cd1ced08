//! Application state - shared across all handlers.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use serde::Deserialize;

use postboard_core::domain::Post;
use postboard_infra::InMemoryPostResource;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<InMemoryPostResource>,
}

/// Accepted seed layouts.
#[derive(Deserialize)]
#[serde(untagged)]
enum Seed {
    Posts(Vec<Post>),
    Db { posts: Vec<Post> },
}

impl AppState {
    /// Build the state, optionally seeding the collection from a file.
    pub fn new(seed_file: Option<&Path>) -> anyhow::Result<Self> {
        let posts = match seed_file {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading seed file {}", path.display()))?;
                let posts = parse_seed(&raw)
                    .with_context(|| format!("parsing seed file {}", path.display()))?;
                tracing::info!(count = posts.len(), path = %path.display(), "Seeded posts");
                posts
            }
            None => {
                tracing::info!("No seed file configured, starting with an empty collection");
                Vec::new()
            }
        };

        Ok(Self::with_posts(posts))
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: Arc::new(InMemoryPostResource::with_posts(posts)),
        }
    }
}

fn parse_seed(raw: &str) -> anyhow::Result<Vec<Post>> {
    let seed: Seed = serde_json::from_str(raw)?;
    Ok(match seed {
        Seed::Posts(posts) | Seed::Db { posts } => posts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use postboard_core::domain::PostId;

    #[test]
    fn test_parse_bare_array() {
        let posts = parse_seed(r#"[{"id":1,"title":"A","views":5}]"#).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, PostId(1));
    }

    #[test]
    fn test_parse_db_json() {
        let raw = r#"{"posts":[{"id":1,"title":"A","views":5},{"id":2,"title":"B","views":"3"}],"comments":[]}"#;
        let posts = parse_seed(raw).unwrap();
        assert_eq!(posts.iter().map(|p| p.id.0).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_parse_garbage_fails() {
        assert!(parse_seed("{\"nope\":true}").is_err());
    }
}
