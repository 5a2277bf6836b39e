//! Scoped cleanup of intermediate files.

use std::path::{Path, PathBuf};
use tracing::warn;

use super::manager::FileLifecycleManager;
use crate::metrics::CLEANUP_FAILURES;

/// Removes every tracked path when dropped, unless disarmed.
///
/// Removal is synchronous so it still runs when the owning future is dropped
/// mid-await.
#[derive(Debug, Default)]
pub struct WorkingFileGuard {
    paths: Vec<PathBuf>,
    /// Paths whose same-stem siblings are swept as well.
    swept: Vec<PathBuf>,
    disarmed: bool,
}

impl WorkingFileGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a path to remove on drop.
    pub fn track(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if !self.paths.contains(&path) {
            self.paths.push(path);
        }
    }

    /// Tracks a path together with every intermediate file sharing its stem.
    ///
    /// Siblings are listed at removal time, so files the extractor creates
    /// after this call are still caught.
    pub fn track_with_artifacts(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if !self.swept.contains(&path) {
            self.swept.push(path.clone());
        }
        self.track(path);
    }

    /// Stops tracking a path.
    pub fn release(&mut self, path: &Path) {
        self.paths.retain(|p| p != path);
        self.swept.retain(|p| p != path);
    }

    /// Tracked paths in insertion order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Everything removal would touch right now: tracked paths plus the
    /// current siblings of swept paths.
    pub fn pending(&self) -> Vec<PathBuf> {
        let mut pending = self.paths.clone();
        for path in &self.swept {
            for artifact in FileLifecycleManager::artifacts_for(path) {
                if !pending.contains(&artifact) {
                    pending.push(artifact);
                }
            }
        }
        pending
    }

    /// Keeps all tracked files on drop.
    pub fn disarm(&mut self) {
        self.disarmed = true;
    }

    pub fn is_armed(&self) -> bool {
        !self.disarmed
    }
}

impl Drop for WorkingFileGuard {
    fn drop(&mut self) {
        if self.disarmed {
            return;
        }
        for path in self.pending() {
            match std::fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Guard failed to remove file");
                    CLEANUP_FAILURES.inc();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_removes_tracked_files_on_drop() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.mp3");
        let b = dir.path().join("b.mp3");
        std::fs::write(&a, b"a").unwrap();

        {
            let mut guard = WorkingFileGuard::new();
            guard.track(&a);
            guard.track(&b);
            guard.track(&a);
            assert_eq!(guard.paths().len(), 2);
        }

        assert!(!a.exists());
        assert!(!b.exists());
    }

    #[test]
    fn test_disarmed_guard_keeps_files() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.mp3");
        std::fs::write(&a, b"a").unwrap();

        {
            let mut guard = WorkingFileGuard::new();
            guard.track(&a);
            guard.disarm();
            assert!(!guard.is_armed());
        }

        assert!(a.exists());
    }

    #[test]
    fn test_sweeps_extractor_leftovers_on_drop() {
        let dir = TempDir::new().unwrap();
        let working = dir.path().join("0b9f.mp3");
        let other = dir.path().join("Keep Me.mp3");
        std::fs::write(&other, b"keep").unwrap();

        {
            let mut guard = WorkingFileGuard::new();
            guard.track_with_artifacts(&working);

            // Created after tracking, like a download in progress.
            std::fs::write(dir.path().join("0b9f.webm.part"), b"partial").unwrap();
            std::fs::write(dir.path().join("0b9f.ytdl"), b"{}").unwrap();
            assert_eq!(guard.pending().len(), 3);
        }

        let remaining: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(remaining, vec![std::ffi::OsString::from("Keep Me.mp3")]);
    }

    #[test]
    fn test_released_path_survives() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.mp3");
        std::fs::write(&a, b"a").unwrap();

        {
            let mut guard = WorkingFileGuard::new();
            guard.track(&a);
            guard.release(&a);
        }

        assert!(a.exists());
    }
}
