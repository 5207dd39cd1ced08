//! Server configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::Context;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// JSON file to seed the collection from: either a bare array of posts
    /// or a json-server `db.json` with a `posts` key.
    pub seed_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            Err(_) => 3000,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
            seed_file: env::var("POSTS_SEED_FILE").ok().map(PathBuf::from),
        })
    }
}
