//! Tagger traits.

use async_trait::async_trait;
use std::path::Path;

use super::error::TaggingError;
use super::types::TagOutcome;
use crate::provider::MediaInfo;

/// Embeds provider metadata into an audio file in place.
#[async_trait]
pub trait MetadataTagger: Send + Sync {
    /// Returns the name of this tagger.
    fn name(&self) -> &str;

    /// Writes title, artist and cover art from `info` into the file.
    ///
    /// Cover art problems are reported in the outcome, not as errors.
    async fn tag(&self, path: &Path, info: &MediaInfo) -> Result<TagOutcome, TaggingError>;
}

/// Downloads image bytes for cover art.
#[async_trait]
pub trait ArtworkFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TaggingError>;
}
