use std::time::Duration;

use thiserror::Error;
use url::Url;

use postboard_core::domain::PostId;

/// Base URL the original page was hard-wired to.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid base URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid timeout: {0}")]
    Timeout(String),

    #[error("HTTP client setup failed: {0}")]
    Client(String),
}

/// Where the collection lives and how long to wait for it.
#[derive(Debug, Clone)]
pub struct HttpResourceConfig {
    /// Resource root; the collection is `<base_url>/posts`.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl HttpResourceConfig {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::Timeout("must be greater than zero".to_string()));
        }

        Ok(Self {
            base_url: normalize(Url::parse(base_url)?),
            timeout,
        })
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup("POSTBOARD_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = match lookup("POSTBOARD_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Timeout(raw.clone()))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Self::new(&base_url, Duration::from_secs(timeout))
    }

    pub fn collection_url(&self) -> Result<Url, ConfigError> {
        Ok(self.base_url.join("posts")?)
    }

    pub fn item_url(&self, id: PostId) -> Result<Url, ConfigError> {
        Ok(self.base_url.join(&format!("posts/{id}"))?)
    }
}

/// Make sure relative joins append below the base path instead of
/// replacing its last segment.
fn normalize(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_localhost() {
        let config =
            HttpResourceConfig::new(DEFAULT_BASE_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
                .unwrap();
        assert_eq!(
            config.collection_url().unwrap().as_str(),
            "http://localhost:3000/posts"
        );
        assert_eq!(
            config.item_url(PostId(4)).unwrap().as_str(),
            "http://localhost:3000/posts/4"
        );
    }

    #[test]
    fn test_base_path_is_kept() {
        let config = HttpResourceConfig::new("http://example.com/api", Duration::from_secs(1)).unwrap();
        assert_eq!(
            config.collection_url().unwrap().as_str(),
            "http://example.com/api/posts"
        );
    }

    #[test]
    fn test_env_lookup() {
        let config = HttpResourceConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:3000/");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let config = HttpResourceConfig::from_lookup(|key| match key {
            "POSTBOARD_BASE_URL" => Some("http://example.com:4000".into()),
            "POSTBOARD_TIMEOUT_SECS" => Some("3".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(
            config.item_url(PostId(1)).unwrap().as_str(),
            "http://example.com:4000/posts/1"
        );
        assert_eq!(config.timeout, Duration::from_secs(3));

        assert!(matches!(
            HttpResourceConfig::from_lookup(|key| {
                (key == "POSTBOARD_TIMEOUT_SECS").then(|| "soon".to_string())
            }),
            Err(ConfigError::Timeout(raw)) if raw == "soon"
        ));
    }

    #[test]
    fn test_from_env_builds_a_config() {
        // Nothing here sets the variables, so whatever the process has must parse.
        if std::env::var_os("POSTBOARD_BASE_URL").is_none()
            && std::env::var_os("POSTBOARD_TIMEOUT_SECS").is_none()
        {
            let config = HttpResourceConfig::from_env().unwrap();
            assert_eq!(config.base_url.as_str(), "http://localhost:3000/");
        }
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            HttpResourceConfig::new("not a url", Duration::from_secs(1)),
            Err(ConfigError::Url(_))
        ));
        assert!(matches!(
            HttpResourceConfig::new("http://localhost", Duration::ZERO),
            Err(ConfigError::Timeout(_))
        ));
    }
}
