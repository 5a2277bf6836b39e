//! Types for acquisition jobs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs::File;
use uuid::Uuid;

use crate::provider::MediaInfo;

/// Lifecycle of a single acquisition job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobState {
    /// Working path allocated, nothing on disk yet.
    Created,
    /// Provider is fetching and transcoding.
    Downloading,
    /// Metadata is being written.
    Tagging,
    /// File is at its effective final path and ready to serve (terminal).
    Finalized,
    /// Job failed and its files were cleaned up (terminal).
    Failed,
}

impl JobState {
    /// Returns true if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Finalized | JobState::Failed)
    }

    /// Returns true if the job may move from this state to `next`.
    pub fn can_transition_to(&self, next: JobState) -> bool {
        use JobState::*;
        match (self, next) {
            (Created, Downloading) | (Downloading, Tagging) | (Tagging, Finalized) => true,
            (state, Failed) => !state.is_terminal(),
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobState::Created => "created",
            JobState::Downloading => "downloading",
            JobState::Tagging => "tagging",
            JobState::Finalized => "finalized",
            JobState::Failed => "failed",
        }
    }
}

/// A recovered problem that did not stop the job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JobWarning {
    /// Tagging failed; the file is served untagged.
    TaggingFailed { reason: String },
    /// Tags were written but cover art was not.
    CoverArtSkipped { reason: String },
    /// The rename failed; the working file is served instead.
    FinalizeFallback { reason: String },
    /// An intermediate file could not be removed.
    CleanupFailed { path: PathBuf, reason: String },
}

impl std::fmt::Display for JobWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobWarning::TaggingFailed { reason } => write!(f, "tagging failed: {}", reason),
            JobWarning::CoverArtSkipped { reason } => write!(f, "cover art skipped: {}", reason),
            JobWarning::FinalizeFallback { reason } => write!(f, "rename failed: {}", reason),
            JobWarning::CleanupFailed { path, reason } => {
                write!(f, "cleanup of {} failed: {}", path.display(), reason)
            }
        }
    }
}

/// State of one acquisition, alive only for the duration of a request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcquisitionJob {
    pub id: Uuid,
    pub requested_url: String,
    pub working_path: PathBuf,
    /// Set once the final name is known.
    pub final_path: Option<PathBuf>,
    pub media_info: Option<MediaInfo>,
    pub state: JobState,
    pub warnings: Vec<JobWarning>,
    pub started_at: DateTime<Utc>,
}

impl AcquisitionJob {
    pub fn new(requested_url: impl Into<String>, working_path: PathBuf) -> Self {
        Self {
            id: Uuid::new_v4(),
            requested_url: requested_url.into(),
            working_path,
            final_path: None,
            media_info: None,
            state: JobState::Created,
            warnings: Vec::new(),
            started_at: Utc::now(),
        }
    }

    /// Moves to `next` if allowed. Returns false and stays put otherwise.
    pub fn transition(&mut self, next: JobState) -> bool {
        if self.state.can_transition_to(next) {
            self.state = next;
            true
        } else {
            false
        }
    }

    pub fn warn(&mut self, warning: JobWarning) {
        self.warnings.push(warning);
    }
}

/// A finished file ready to stream to the caller.
///
/// The handle is already open. The file stays on disk after the response.
#[derive(Debug)]
pub struct AcquiredFile {
    pub file: File,
    /// Effective path on disk.
    pub path: PathBuf,
    /// Name to offer the client in the attachment header.
    pub download_name: String,
    pub content_type: &'static str,
    pub size_bytes: u64,
    pub job: AcquisitionJob,
}

impl AcquiredFile {
    pub fn warnings(&self) -> &[JobWarning] {
        &self.job.warnings
    }
}
