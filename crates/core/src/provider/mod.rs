//! External media provider abstraction.
//!
//! A provider performs two operations on behalf of the rest of the system:
//! flat searches that return raw catalogue entries, and downloads that fetch a
//! single item and transcode it into an audio file at a caller-chosen path.
//! Everything about how that happens (network, extractor, transcoder) is opaque.
//!
//! # Example
//!
//! ```ignore
//! use tubetag_core::provider::{create_provider, DownloadRequest, ProviderConfig};
//!
//! let provider = create_provider(&ProviderConfig::default());
//! provider.validate().await?;
//!
//! let entries = provider.search("lofi beats", 5).await?;
//! println!("{} entries", entries.iter().flatten().count());
//!
//! let output = provider
//!     .download(DownloadRequest::mp3("https://youtu.be/abc", "/tmp/x.mp3".into(), 192))
//!     .await?;
//! println!("{:?}", output.info.title);
//! ```

mod config;
mod error;
mod traits;
mod types;
mod ytdlp;

pub use config::{ProviderBackend, ProviderConfig};
pub use error::ProviderError;
pub use traits::MediaProvider;
pub use types::{
    AudioFormat, AudioTarget, DownloadOutput, DownloadRequest, MediaInfo, RawEntry, RawThumbnail,
};
pub use ytdlp::YtDlpProvider;

/// Creates the provider selected by the configuration.
pub fn create_provider(config: &ProviderConfig) -> Box<dyn MediaProvider> {
    match config.backend {
        ProviderBackend::YtDlp => Box::new(YtDlpProvider::new(config.clone())),
    }
}
