//! Types exchanged with a media provider.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A thumbnail as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawThumbnail {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// One entry of a flat search, exactly as the provider reported it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub thumbnails: Option<Vec<RawThumbnail>>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub channel_url: Option<String>,
    #[serde(default)]
    pub view_count: Option<u64>,
}

/// Metadata reported for a downloaded item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub uploader: Option<String>,
    /// Best thumbnail URL chosen by the provider.
    #[serde(default, rename = "thumbnail")]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub webpage_url: Option<String>,
}

/// Output audio format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioFormat {
    #[default]
    Mp3,
}

impl AudioFormat {
    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
        }
    }

    /// MIME type used when serving the file.
    pub fn mime_type(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "audio/mpeg",
        }
    }

    /// Codec name understood by the extractor's audio post-processor.
    pub fn codec_name(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
        }
    }
}

/// Target audio encoding for a download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioTarget {
    pub format: AudioFormat,
    pub bitrate_kbps: u32,
}

impl Default for AudioTarget {
    fn default() -> Self {
        Self {
            format: AudioFormat::Mp3,
            bitrate_kbps: 192,
        }
    }
}

/// A request to fetch and transcode one item.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadRequest {
    /// Source URL.
    pub url: String,
    /// Where the transcoded file must end up.
    pub output_path: PathBuf,
    /// Audio encoding to produce.
    pub audio: AudioTarget,
}

impl DownloadRequest {
    /// Creates an MP3 download request at the given bitrate.
    pub fn mp3(url: impl Into<String>, output_path: PathBuf, bitrate_kbps: u32) -> Self {
        Self {
            url: url.into(),
            output_path,
            audio: AudioTarget {
                format: AudioFormat::Mp3,
                bitrate_kbps,
            },
        }
    }
}

/// Result of a successful download.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadOutput {
    /// Path of the produced file.
    pub path: PathBuf,
    /// Metadata reported by the provider.
    pub info: MediaInfo,
}
