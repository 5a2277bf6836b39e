//! Testing utilities and mock implementations.
//!
//! This module provides mock implementations of the provider and tagger
//! traits, allowing the pipelines and the HTTP layer to be tested without a
//! real extractor binary or network access.
//!
//! # Example
//!
//! ```rust,ignore
//! use tubetag_core::testing::{fixtures, MockMediaProvider, MockTagger};
//!
//! let provider = MockMediaProvider::new();
//! let tagger = MockTagger::new();
//!
//! // Configure mock responses
//! provider.set_search_results(fixtures::raw_entries(5)).await;
//! provider.set_download_info(fixtures::media_info("My Song")).await;
//!
//! // Use in AppState...
//! ```

mod mock_provider;
mod mock_tagger;

pub use mock_provider::MockMediaProvider;
pub use mock_tagger::MockTagger;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::provider::{MediaInfo, RawEntry, RawThumbnail};

    /// Create `count` search entries with ids `vid0`, `vid1`, ...
    pub fn raw_entries(count: usize) -> Vec<Option<RawEntry>> {
        (0..count).map(|i| Some(raw_entry(&format!("vid{}", i)))).collect()
    }

    /// Create a search entry with reasonable defaults.
    pub fn raw_entry(id: &str) -> RawEntry {
        RawEntry {
            id: Some(id.to_string()),
            title: Some(format!("Video {}", id)),
            url: Some(format!("https://www.youtube.com/watch?v={}", id)),
            thumbnails: Some(vec![
                RawThumbnail {
                    url: format!("https://i.ytimg.com/vi/{}/default.jpg", id),
                    width: Some(120),
                    height: Some(90),
                },
                RawThumbnail {
                    url: format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", id),
                    width: Some(480),
                    height: Some(360),
                },
            ]),
            duration: Some(180.0),
            uploader: Some("Test Channel".to_string()),
            channel_url: Some("https://www.youtube.com/channel/UCtest".to_string()),
            view_count: Some(1000),
        }
    }

    /// Create download metadata for the given title.
    pub fn media_info(title: &str) -> MediaInfo {
        MediaInfo {
            id: Some("abc123".to_string()),
            title: Some(title.to_string()),
            uploader: Some("Test Channel".to_string()),
            thumbnail_url: Some("https://i.ytimg.com/vi/abc123/maxresdefault.jpg".to_string()),
            duration: Some(180.0),
            webpage_url: Some("https://www.youtube.com/watch?v=abc123".to_string()),
        }
    }

    /// A short, valid MPEG-1 Layer III stream with no tags.
    ///
    /// Twenty silent 128 kbps / 44.1 kHz stereo frames.
    pub fn minimal_mp3_bytes() -> Vec<u8> {
        const FRAME_LEN: usize = 417; // 144 * 128000 / 44100
        const HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x00];

        let mut bytes = Vec::with_capacity(FRAME_LEN * 20);
        for _ in 0..20 {
            bytes.extend_from_slice(&HEADER);
            bytes.resize(bytes.len() + FRAME_LEN - HEADER.len(), 0);
        }
        bytes
    }

    /// A 1x1 transparent PNG.
    pub fn tiny_png_bytes() -> Vec<u8> {
        vec![
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48,
            0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00,
            0x00, 0x1F, 0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78,
            0x9C, 0x63, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00,
            0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
        ]
    }
}
