//! Error types for the tagger module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while tagging a file.
#[derive(Debug, Error)]
pub enum TaggingError {
    /// The container or its tags could not be read or written.
    #[error("Tag I/O failed for {path}: {source}")]
    Tag {
        path: PathBuf,
        #[source]
        source: lofty::error::LoftyError,
    },

    /// The container has no tag this file can hold.
    #[error("No writable tag for {path}")]
    NoWritableTag { path: PathBuf },

    /// Cover art could not be fetched.
    #[error("Failed to fetch artwork from {url}: {reason}")]
    Artwork { url: String, reason: String },

    /// The blocking tag task did not complete.
    #[error("Tagging task failed: {0}")]
    Task(String),

    /// The HTTP client could not be built.
    #[error("Failed to build artwork client: {0}")]
    Client(String),
}

impl TaggingError {
    pub fn artwork(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Artwork {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Artwork { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artwork_error_display() {
        let err = TaggingError::artwork("https://i.ytimg.com/x.jpg", "HTTP 404");
        assert_eq!(
            err.to_string(),
            "Failed to fetch artwork from https://i.ytimg.com/x.jpg: HTTP 404"
        );
        assert!(err.is_retryable());
        assert!(!TaggingError::Task("panicked".into()).is_retryable());
    }
}
