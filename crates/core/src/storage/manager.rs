//! Working/final file lifecycle.

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

use super::config::StorageConfig;
use super::error::StorageError;
use super::sanitize::sanitize_title;
use crate::metrics::{CLEANUP_FAILURES, FINALIZE_FALLBACKS};

/// Extension used for working and final files.
const AUDIO_EXTENSION: &str = "mp3";
/// Stem used when neither the title nor the configured fallback survive sanitizing.
const DEFAULT_STEM: &str = "audio";

/// Outcome of a finalize step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finalized {
    /// Path that now holds the file.
    pub path: PathBuf,
    /// Set when the rename failed and the working path is served instead.
    pub fallback_reason: Option<String>,
}

impl Finalized {
    /// Whether the working path was kept instead of the final name.
    pub fn fell_back(&self) -> bool {
        self.fallback_reason.is_some()
    }

    /// File name of the effective path.
    pub fn file_name(&self) -> Option<String> {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }
}

/// A path that cleanup could not remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Result of a cleanup pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    /// Paths that existed and were removed.
    pub removed: Vec<PathBuf>,
    /// Paths that could not be removed.
    pub failures: Vec<CleanupFailure>,
}

impl CleanupReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Allocates, finalizes and cleans up files in the output directory.
#[derive(Debug, Clone)]
pub struct FileLifecycleManager {
    config: StorageConfig,
}

impl FileLifecycleManager {
    /// Creates a new manager with the given configuration.
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Creates a manager with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(StorageConfig::default())
    }

    /// Directory holding all managed files.
    pub fn output_dir(&self) -> &Path {
        &self.config.output_dir
    }

    /// Creates the output directory if it does not exist.
    pub async fn ensure_output_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.config.output_dir)
            .await
            .map_err(|e| StorageError::DirectoryCreationFailed {
                path: self.config.output_dir.clone(),
                source: e,
            })
    }

    /// Returns a fresh working path that no concurrent job will also get.
    pub fn allocate_working_path(&self) -> PathBuf {
        self.config
            .output_dir
            .join(format!("{}.{}", Uuid::new_v4(), AUDIO_EXTENSION))
    }

    /// Final file name for a reported title.
    pub fn final_name_for(&self, title: Option<&str>) -> String {
        let mut stem = title.map(sanitize_title).unwrap_or_default();
        if stem.is_empty() {
            stem = sanitize_title(&self.config.fallback_name);
        }
        if stem.is_empty() {
            stem = DEFAULT_STEM.to_string();
        }
        format!("{}.{}", stem, AUDIO_EXTENSION)
    }

    /// Final path for a reported title.
    pub fn final_path_for(&self, title: Option<&str>) -> PathBuf {
        self.config.output_dir.join(self.final_name_for(title))
    }

    /// Moves the working file to its final name.
    ///
    /// A file already at `desired` is removed first. Any OS error leaves the
    /// working file in place and returns it as the effective path.
    pub async fn finalize(&self, working: &Path, desired: &Path) -> Finalized {
        if working == desired {
            return Finalized {
                path: working.to_path_buf(),
                fallback_reason: None,
            };
        }

        match Self::replace(working, desired).await {
            Ok(()) => {
                debug!(from = %working.display(), to = %desired.display(), "Finalized file");
                Finalized {
                    path: desired.to_path_buf(),
                    fallback_reason: None,
                }
            }
            Err(e) => {
                warn!(
                    working = %working.display(),
                    desired = %desired.display(),
                    error = %e,
                    "Rename failed, serving working file"
                );
                FINALIZE_FALLBACKS.inc();
                Finalized {
                    path: working.to_path_buf(),
                    fallback_reason: Some(e.to_string()),
                }
            }
        }
    }

    async fn replace(working: &Path, desired: &Path) -> std::io::Result<()> {
        match fs::remove_file(desired).await {
            Ok(()) => debug!(path = %desired.display(), "Replaced existing file"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        fs::rename(working, desired).await
    }

    /// Files next to `working` that share its stem, `working` included.
    ///
    /// The extractor writes `<stem>.<ext>.part`, `<stem>.<ext>` and
    /// `<stem>.ytdl` before the final `<stem>.mp3`, and leaves them behind when
    /// it is interrupted. Directories are skipped. An unreadable directory
    /// yields an empty list.
    pub fn artifacts_for(working: &Path) -> Vec<PathBuf> {
        let (Some(dir), Some(stem)) = (working.parent(), working.file_stem()) else {
            return Vec::new();
        };
        let prefix = format!("{}.", stem.to_string_lossy());
        let dir = if dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            dir
        };

        let Ok(entries) = std::fs::read_dir(dir) else {
            return Vec::new();
        };

        let mut artifacts: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| !t.is_dir()).unwrap_or(false))
            .filter(|entry| entry.file_name().to_string_lossy().starts_with(&prefix))
            .map(|entry| dir.join(entry.file_name()))
            .collect();
        artifacts.sort();
        artifacts
    }

    /// Removes every path that exists. Never fails.
    pub async fn cleanup(&self, paths: &[PathBuf]) -> CleanupReport {
        let mut report = CleanupReport::default();

        for path in paths {
            match fs::remove_file(path).await {
                Ok(()) => {
                    debug!(path = %path.display(), "Removed intermediate file");
                    report.removed.push(path.clone());
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to remove intermediate file");
                    CLEANUP_FAILURES.inc();
                    report.failures.push(CleanupFailure {
                        path: path.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        report
    }
}
