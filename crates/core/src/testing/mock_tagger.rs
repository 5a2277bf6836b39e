//! Mock tagger for testing.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::provider::MediaInfo;
use crate::tagger::{CoverArtStatus, MetadataTagger, TagOutcome, TaggingError};

/// Mock implementation of the MetadataTagger trait.
///
/// Records every path it is asked to tag and never touches the file.
#[derive(Debug)]
pub struct MockTagger {
    tagged: Arc<RwLock<Vec<PathBuf>>>,
    next_error: Arc<RwLock<Option<TaggingError>>>,
    /// Overrides the outcome derived from the media info.
    outcome: Arc<RwLock<Option<TagOutcome>>>,
}

impl Default for MockTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTagger {
    pub fn new() -> Self {
        Self {
            tagged: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
            outcome: Arc::new(RwLock::new(None)),
        }
    }

    /// Paths passed to `tag`, in call order.
    pub async fn tagged_paths(&self) -> Vec<PathBuf> {
        self.tagged.read().await.clone()
    }

    /// Configure the next call to fail with the given error.
    pub async fn set_next_error(&self, error: TaggingError) {
        *self.next_error.write().await = Some(error);
    }

    /// Return this outcome from every successful call.
    pub async fn set_outcome(&self, outcome: TagOutcome) {
        *self.outcome.write().await = Some(outcome);
    }
}

#[async_trait]
impl MetadataTagger for MockTagger {
    fn name(&self) -> &str {
        "mock"
    }

    async fn tag(&self, path: &Path, info: &MediaInfo) -> Result<TagOutcome, TaggingError> {
        self.tagged.write().await.push(path.to_path_buf());

        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        if let Some(outcome) = self.outcome.read().await.clone() {
            return Ok(outcome);
        }

        Ok(TagOutcome {
            written: true,
            title_set: info.title.is_some(),
            artist_set: info.uploader.is_some(),
            cover_art: CoverArtStatus::NotRequested,
        })
    }
}
