use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use url::Url;

use postboard_core::RemoteError;
use postboard_core::domain::{Post, PostId};
use postboard_core::ports::PostResource;

use super::config::{ConfigError, HttpResourceConfig};

/// reqwest-backed client for `<base>/posts`.
///
/// One request per call, no retries. Success bodies of writes are ignored.
pub struct HttpPostResource {
    client: Client,
    config: HttpResourceConfig,
}

impl HttpPostResource {
    pub fn new(config: HttpResourceConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        tracing::info!(base_url = %config.base_url, "Post resource client ready");

        Ok(Self { client, config })
    }

    pub fn user_agent() -> &'static str {
        concat!("postboard/", env!("CARGO_PKG_VERSION"))
    }

    pub fn config(&self) -> &HttpResourceConfig {
        &self.config
    }

    fn collection_url(&self) -> Result<Url, RemoteError> {
        self.config
            .collection_url()
            .map_err(|e| RemoteError::Transport(e.to_string()))
    }

    fn item_url(&self, id: PostId) -> Result<Url, RemoteError> {
        self.config
            .item_url(id)
            .map_err(|e| RemoteError::Transport(e.to_string()))
    }

    /// Send and turn anything but a 2xx into an error.
    async fn send(request: RequestBuilder) -> Result<Response, RemoteError> {
        let response = request
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl PostResource for HttpPostResource {
    async fn list(&self) -> Result<Vec<Post>, RemoteError> {
        let url = self.collection_url()?;
        tracing::debug!(%url, "GET posts");

        let response = Self::send(self.client.get(url)).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| RemoteError::Decode(e.to_string()))
    }

    async fn create(&self, post: &Post) -> Result<(), RemoteError> {
        let url = self.collection_url()?;
        tracing::debug!(%url, post_id = %post.id, "POST post");

        Self::send(self.client.post(url).json(post)).await?;
        Ok(())
    }

    async fn replace(&self, id: PostId, post: &Post) -> Result<(), RemoteError> {
        let url = self.item_url(id)?;
        tracing::debug!(%url, post_id = %id, "PUT post");

        Self::send(self.client.put(url).json(post)).await?;
        Ok(())
    }

    async fn delete(&self, id: PostId) -> Result<(), RemoteError> {
        let url = self.item_url(id)?;
        tracing::debug!(%url, post_id = %id, "DELETE post");

        Self::send(self.client.delete(url)).await?;
        Ok(())
    }
}
