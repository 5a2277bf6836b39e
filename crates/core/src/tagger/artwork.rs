//! HTTP cover art fetching.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use super::config::TaggerConfig;
use super::error::TaggingError;
use super::traits::ArtworkFetcher;

/// Fetches artwork with a plain HTTP GET.
pub struct HttpArtworkFetcher {
    client: reqwest::Client,
}

impl HttpArtworkFetcher {
    pub fn new(config: &TaggerConfig) -> Result<Self, TaggingError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.artwork_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| TaggingError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ArtworkFetcher for HttpArtworkFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TaggingError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TaggingError::artwork(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TaggingError::artwork(url, format!("HTTP {}", status)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TaggingError::artwork(url, e.to_string()))?;

        if bytes.is_empty() {
            return Err(TaggingError::artwork(url, "empty response body"));
        }

        debug!(url, size = bytes.len(), "Fetched artwork");
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_host_is_an_artwork_error() {
        let fetcher = HttpArtworkFetcher::new(&TaggerConfig {
            artwork_timeout_secs: 2,
            ..Default::default()
        })
        .unwrap();

        // Port 9 (discard) is closed on test machines.
        let result = fetcher.fetch("http://127.0.0.1:9/cover.jpg").await;
        assert!(matches!(result, Err(TaggingError::Artwork { .. })));
    }
}
