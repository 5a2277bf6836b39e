//! Mock media provider for testing.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use super::fixtures;
use crate::provider::{
    DownloadOutput, DownloadRequest, MediaInfo, MediaProvider, ProviderError, RawEntry,
};

/// Mock implementation of the MediaProvider trait.
///
/// Provides controllable behavior for testing:
/// - Canned search entries and download metadata
/// - Injected errors for the next call
/// - Simulated download latency
/// - Recorded calls for assertions
///
/// Downloads write [`fixtures::minimal_mp3_bytes`] to the requested path, so
/// the produced file is real, taggable audio.
///
/// # Example
///
/// ```rust,ignore
/// use tubetag_core::testing::{fixtures, MockMediaProvider};
///
/// let provider = MockMediaProvider::new();
/// provider.set_search_results(fixtures::raw_entries(3)).await;
/// provider.set_download_info(fixtures::media_info("My Song")).await;
///
/// let entries = provider.search("anything", 3).await?;
/// assert_eq!(entries.len(), 3);
/// ```
#[derive(Debug)]
pub struct MockMediaProvider {
    searches: Arc<RwLock<Vec<(String, u32)>>>,
    downloads: Arc<RwLock<Vec<DownloadRequest>>>,
    search_results: Arc<RwLock<Vec<Option<RawEntry>>>>,
    download_info: Arc<RwLock<MediaInfo>>,
    /// If set, the next operation will fail with this error.
    next_error: Arc<RwLock<Option<ProviderError>>>,
    download_delay: Arc<RwLock<Duration>>,
    /// Write the output file before the delay and error check.
    partial_write: Arc<RwLock<bool>>,
}

impl Default for MockMediaProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMediaProvider {
    /// Create a new mock provider.
    pub fn new() -> Self {
        Self {
            searches: Arc::new(RwLock::new(Vec::new())),
            downloads: Arc::new(RwLock::new(Vec::new())),
            search_results: Arc::new(RwLock::new(Vec::new())),
            download_info: Arc::new(RwLock::new(fixtures::media_info("Test Song"))),
            next_error: Arc::new(RwLock::new(None)),
            download_delay: Arc::new(RwLock::new(Duration::ZERO)),
            partial_write: Arc::new(RwLock::new(false)),
        }
    }

    /// Searches made so far as `(query, limit)`.
    pub async fn recorded_searches(&self) -> Vec<(String, u32)> {
        self.searches.read().await.clone()
    }

    /// Download requests made so far.
    pub async fn recorded_downloads(&self) -> Vec<DownloadRequest> {
        self.downloads.read().await.clone()
    }

    /// Set the entries returned by every search.
    pub async fn set_search_results(&self, entries: Vec<Option<RawEntry>>) {
        *self.search_results.write().await = entries;
    }

    /// Set the metadata reported by every download.
    pub async fn set_download_info(&self, info: MediaInfo) {
        *self.download_info.write().await = info;
    }

    /// Configure the next operation to fail with the given error.
    pub async fn set_next_error(&self, error: ProviderError) {
        *self.next_error.write().await = Some(error);
    }

    /// Set how long each download takes.
    pub async fn set_download_delay(&self, delay: Duration) {
        *self.download_delay.write().await = delay;
    }

    /// Leave files behind even if the download then fails: the output path
    /// and a `<stem>.webm.part` intermediate, as an interrupted extractor does.
    pub async fn set_partial_write(&self, enabled: bool) {
        *self.partial_write.write().await = enabled;
    }

    async fn take_error(&self) -> Option<ProviderError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl MediaProvider for MockMediaProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn search(&self, query: &str, limit: u32) -> Result<Vec<Option<RawEntry>>, ProviderError> {
        self.searches
            .write()
            .await
            .push((query.to_string(), limit));

        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        Ok(self.search_results.read().await.clone())
    }

    async fn download(&self, request: DownloadRequest) -> Result<DownloadOutput, ProviderError> {
        self.downloads.write().await.push(request.clone());

        let partial_write = *self.partial_write.read().await;
        let intermediate = request.output_path.with_extension("webm.part");
        if partial_write {
            tokio::fs::write(&intermediate, b"partial").await?;
            tokio::fs::write(&request.output_path, fixtures::minimal_mp3_bytes()).await?;
        }

        let delay = *self.download_delay.read().await;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        if partial_write {
            tokio::fs::remove_file(&intermediate).await?;
        } else {
            tokio::fs::write(&request.output_path, fixtures::minimal_mp3_bytes()).await?;
        }

        Ok(DownloadOutput {
            path: request.output_path,
            info: self.download_info.read().await.clone(),
        })
    }

    async fn validate(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}
