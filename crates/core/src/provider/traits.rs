//! Trait definitions for the provider module.

use async_trait::async_trait;

use super::error::ProviderError;
use super::types::{DownloadOutput, DownloadRequest, RawEntry};

/// A black-box capability that can search for media and download it as audio.
#[async_trait]
pub trait MediaProvider: Send + Sync {
    /// Returns the name of this provider implementation.
    fn name(&self) -> &str;

    /// Runs a flat search (no download) and returns at most `limit` entries.
    ///
    /// Entries the provider could not resolve (removed, region-blocked, ...)
    /// are returned as `None` in their original position.
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<Option<RawEntry>>, ProviderError>;

    /// Fetches the resource and transcodes it to `request.output_path`.
    ///
    /// The returned future may be dropped at any time; implementations must not
    /// leave a running child process behind when that happens.
    async fn download(&self, request: DownloadRequest) -> Result<DownloadOutput, ProviderError>;

    /// Validates that the provider is properly configured and ready.
    async fn validate(&self) -> Result<(), ProviderError>;
}
