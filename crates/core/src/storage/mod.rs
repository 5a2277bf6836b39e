//! Storage module for working and final audio files.
//!
//! Every acquisition writes into a uniquely named working file, then renames
//! it to a human-readable name derived from the media title. The module owns
//! both halves of that lifecycle:
//!
//! - collision-free working path allocation
//! - title sanitization for final names
//! - replace-then-rename finalization with fallback to the working path
//! - best-effort cleanup that never fails the caller
//! - a drop guard that removes intermediate files if a job is abandoned
//!
//! # Example
//!
//! ```ignore
//! use tubetag_core::storage::{FileLifecycleManager, StorageConfig, WorkingFileGuard};
//!
//! let manager = FileLifecycleManager::new(StorageConfig::default());
//! manager.ensure_output_dir().await?;
//!
//! let working = manager.allocate_working_path();
//! let mut guard = WorkingFileGuard::new();
//! guard.track(working.clone());
//!
//! // ... produce the file ...
//!
//! let finalized = manager.finalize(&working, &manager.final_path_for(Some("My Song"))).await;
//! guard.disarm();
//! println!("serving {}", finalized.path.display());
//! ```

mod config;
mod error;
mod guard;
mod manager;
mod sanitize;

pub use config::StorageConfig;
pub use error::StorageError;
pub use guard::WorkingFileGuard;
pub use manager::{CleanupFailure, CleanupReport, FileLifecycleManager, Finalized};
pub use sanitize::sanitize_title;
