//! HTTP client for the posts endpoint

use crate::constants::USER_AGENT;
use crate::error::FetchError;
use crate::types::Post;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct PostsClient {
    client: reqwest::Client,
    url: String,
}

impl PostsClient {
    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self::from_client(client, url))
    }

    /// Wrap an already configured reqwest client
    pub fn from_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }

    /// Issue a single GET and decode the response as a list of posts.
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        debug!(url = %self.url, "Fetching posts");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, status = %status, "Posts request rejected");
            return Err(FetchError::Status { status: status.as_u16() });
        }

        let posts: Vec<Post> = response.json().await.map_err(|e| {
            if e.is_decode() {
                FetchError::Decode(e)
            } else {
                FetchError::Transport(e)
            }
        })?;

        info!(count = posts.len(), "Posts fetched");
        Ok(posts)
    }
}
