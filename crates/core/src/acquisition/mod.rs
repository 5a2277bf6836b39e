//! Acquisition pipeline: one URL in, one tagged audio file out.
//!
//! A job walks `Created → Downloading → Tagging → Finalized`, or drops to
//! `Failed` from any live state. Steps:
//!
//! 1. Validate the URL and allocate a unique working path.
//! 2. Download and transcode through the provider (bounded by a semaphore,
//!    the provider's timeout and an optional cancellation token).
//! 3. Tag title, artist and cover art. Failures become warnings.
//! 4. Rename to the sanitized title, replacing any existing file. If the
//!    rename fails the working file is served instead.
//! 5. Open the file for streaming.
//!
//! Any failure removes every file the job created before returning.
//!
//! # Example
//!
//! ```ignore
//! use tubetag_core::acquisition::{AcquisitionConfig, AcquisitionPipeline};
//!
//! let pipeline = AcquisitionPipeline::new(provider, tagger, storage, AcquisitionConfig::default());
//! let acquired = pipeline.acquire("https://www.youtube.com/watch?v=abc").await?;
//! println!("{} ({} bytes)", acquired.download_name, acquired.size_bytes);
//! for warning in acquired.warnings() {
//!     println!("warning: {}", warning);
//! }
//! ```

mod config;
mod error;
mod pipeline;
mod types;

pub use config::AcquisitionConfig;
pub use error::AcquisitionError;
pub use pipeline::AcquisitionPipeline;
pub use types::{AcquiredFile, AcquisitionJob, JobState, JobWarning};
