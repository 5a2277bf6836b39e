//! Types for tagging outcomes.

use serde::{Deserialize, Serialize};

/// What happened to cover art during tagging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CoverArtStatus {
    /// Embedded as the front cover.
    Embedded { mime_type: String, size_bytes: usize },
    /// A thumbnail was reported but could not be used.
    Skipped { reason: String },
    /// No thumbnail was reported.
    NotRequested,
}

/// Result of a successful tagging pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagOutcome {
    /// False when tagging is disabled and the file was left alone.
    pub written: bool,
    pub title_set: bool,
    pub artist_set: bool,
    pub cover_art: CoverArtStatus,
}

impl TagOutcome {
    /// Outcome for a file that was not touched.
    pub fn untouched() -> Self {
        Self {
            written: false,
            title_set: false,
            artist_set: false,
            cover_art: CoverArtStatus::NotRequested,
        }
    }

    /// Metric label for this outcome.
    pub fn label(&self) -> &'static str {
        match (&self.written, &self.cover_art) {
            (false, _) => "disabled",
            (true, CoverArtStatus::Skipped { .. }) => "tagged_without_cover",
            (true, _) => "tagged",
        }
    }

    /// Reason cover art was skipped, if it was.
    pub fn cover_skip_reason(&self) -> Option<&str> {
        match &self.cover_art {
            CoverArtStatus::Skipped { reason } => Some(reason),
            _ => None,
        }
    }
}
