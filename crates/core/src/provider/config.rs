//! Configuration for the media provider.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Available provider backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderBackend {
    #[default]
    YtDlp,
}

/// Configuration for the external media provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Which backend to use.
    #[serde(default)]
    pub backend: ProviderBackend,

    /// Path to the yt-dlp binary.
    #[serde(default = "default_yt_dlp_path")]
    pub yt_dlp_path: PathBuf,

    /// Directory or binary path passed to `--ffmpeg-location`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ffmpeg_location: Option<PathBuf>,

    /// Timeout for a flat search in seconds.
    #[serde(default = "default_search_timeout")]
    pub search_timeout_secs: u64,

    /// Timeout for a download and transcode in seconds.
    #[serde(default = "default_download_timeout")]
    pub download_timeout_secs: u64,

    /// Additional arguments appended to every invocation.
    #[serde(default)]
    pub extra_args: Vec<String>,
}

fn default_yt_dlp_path() -> PathBuf {
    PathBuf::from("yt-dlp")
}

fn default_search_timeout() -> u64 {
    60
}

fn default_download_timeout() -> u64 {
    900 // 15 minutes
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            backend: ProviderBackend::default(),
            yt_dlp_path: default_yt_dlp_path(),
            ffmpeg_location: None,
            search_timeout_secs: default_search_timeout(),
            download_timeout_secs: default_download_timeout(),
            extra_args: Vec::new(),
        }
    }
}

impl ProviderConfig {
    /// Creates a config pointing at a specific yt-dlp binary.
    pub fn with_binary(yt_dlp_path: PathBuf) -> Self {
        Self {
            yt_dlp_path,
            ..Default::default()
        }
    }

    /// Sets the ffmpeg location.
    pub fn with_ffmpeg_location(mut self, path: PathBuf) -> Self {
        self.ffmpeg_location = Some(path);
        self
    }

    /// Sets the search timeout in seconds.
    pub fn with_search_timeout(mut self, timeout_secs: u64) -> Self {
        self.search_timeout_secs = timeout_secs;
        self
    }

    /// Sets the download timeout in seconds.
    pub fn with_download_timeout(mut self, timeout_secs: u64) -> Self {
        self.download_timeout_secs = timeout_secs;
        self
    }
}
