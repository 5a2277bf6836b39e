//! Configuration for the acquisition pipeline.

use serde::{Deserialize, Serialize};

/// Settings for fetching audio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcquisitionConfig {
    /// Target MP3 bitrate in kbps.
    #[serde(default = "default_bitrate")]
    pub bitrate_kbps: u32,

    /// Maximum provider downloads running at once.
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent_downloads: usize,
}

fn default_bitrate() -> u32 {
    192
}

fn default_max_concurrent() -> usize {
    4
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            bitrate_kbps: default_bitrate(),
            max_concurrent_downloads: default_max_concurrent(),
        }
    }
}

impl AcquisitionConfig {
    pub fn with_bitrate(mut self, bitrate_kbps: u32) -> Self {
        self.bitrate_kbps = bitrate_kbps;
        self
    }

    pub fn with_max_concurrent(mut self, max: usize) -> Self {
        self.max_concurrent_downloads = max;
        self
    }
}
