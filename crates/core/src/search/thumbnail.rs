//! Thumbnail selection.

use std::cmp::Reverse;

use crate::provider::RawThumbnail;

/// A thumbnail the selector can rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailCandidate {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ThumbnailCandidate {
    pub fn new(url: impl Into<String>, width: Option<u32>, height: Option<u32>) -> Self {
        Self {
            url: url.into(),
            width,
            height,
        }
    }

    /// Ranking key. Missing dimensions count as zero.
    fn resolution(&self) -> (u32, u32) {
        (self.width.unwrap_or(0), self.height.unwrap_or(0))
    }
}

impl From<&RawThumbnail> for ThumbnailCandidate {
    fn from(raw: &RawThumbnail) -> Self {
        Self::new(raw.url.clone(), raw.width, raw.height)
    }
}

/// Returns the URL of the highest-resolution candidate.
///
/// Candidates are ranked by `(width, height)` descending. On ties the one
/// listed first wins.
pub fn select_best_thumbnail(candidates: Option<&[ThumbnailCandidate]>) -> Option<String> {
    candidates?
        .iter()
        // min_by_key keeps the first of equal elements
        .min_by_key(|c| Reverse(c.resolution()))
        .map(|c| c.url.clone())
}
