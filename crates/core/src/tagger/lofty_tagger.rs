//! Tag writer backed by `lofty`.

use async_trait::async_trait;
use lofty::config::WriteOptions;
use lofty::file::TaggedFileExt;
use lofty::picture::{MimeType, Picture, PictureType};
use lofty::probe::Probe;
use lofty::tag::{Accessor, Tag, TagExt};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

use super::error::TaggingError;
use super::traits::{ArtworkFetcher, MetadataTagger};
use super::types::{CoverArtStatus, TagOutcome};
use crate::provider::MediaInfo;

/// Writes the container's native tag (ID3v2 for MP3) with lofty.
pub struct LoftyTagger {
    fetcher: Arc<dyn ArtworkFetcher>,
}

impl LoftyTagger {
    pub fn new(fetcher: Arc<dyn ArtworkFetcher>) -> Self {
        Self { fetcher }
    }

    async fn fetch_cover(&self, url: &str) -> Result<Picture, String> {
        let data = self.fetcher.fetch(url).await.map_err(|e| e.to_string())?;
        let mime = sniff_mime(&data);

        Ok(Picture::new_unchecked(
            PictureType::CoverFront,
            Some(mime),
            Some("Cover".into()),
            data,
        ))
    }
}

/// Guesses an image MIME type from magic bytes. Unknown data is labelled JPEG.
fn sniff_mime(data: &[u8]) -> MimeType {
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        MimeType::Jpeg
    } else if data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        MimeType::Png
    } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        MimeType::Gif
    } else {
        MimeType::Jpeg
    }
}

struct TagWrite {
    title: Option<String>,
    artist: Option<String>,
    cover: Option<Picture>,
}

fn require_tag<'a>(tag: Option<&'a mut Tag>, path: &Path) -> Result<&'a mut Tag, TaggingError> {
    tag.ok_or_else(|| TaggingError::NoWritableTag {
        path: path.to_path_buf(),
    })
}

/// Reads, edits and saves the primary tag. Saves once, at the end.
fn write_tags(path: &Path, write: TagWrite) -> Result<(), TaggingError> {
    let tag_err = |source| TaggingError::Tag {
        path: path.to_path_buf(),
        source,
    };

    let mut tagged_file = Probe::open(path)
        .and_then(|probe| probe.read())
        .map_err(tag_err)?;

    if tagged_file.primary_tag().is_none() {
        let tag_type = tagged_file.primary_tag_type();
        tagged_file.insert_tag(Tag::new(tag_type));
    }

    // insert_tag only refuses tag types the format cannot hold
    let tag = require_tag(tagged_file.primary_tag_mut(), path)?;

    if let Some(title) = write.title {
        tag.set_title(title);
    }
    if let Some(artist) = write.artist {
        tag.set_artist(artist);
    }
    if let Some(picture) = write.cover {
        tag.remove_picture_type(PictureType::CoverFront);
        tag.push_picture(picture);
    }

    tag.save_to_path(path, WriteOptions::default())
        .map_err(tag_err)
}

#[async_trait]
impl MetadataTagger for LoftyTagger {
    fn name(&self) -> &str {
        "lofty"
    }

    async fn tag(&self, path: &Path, info: &MediaInfo) -> Result<TagOutcome, TaggingError> {
        let title = info.title.clone().filter(|t| !t.is_empty());
        let artist = info.uploader.clone().filter(|a| !a.is_empty());

        let (cover, cover_art) = match info.thumbnail_url.as_deref() {
            None | Some("") => (None, CoverArtStatus::NotRequested),
            Some(url) => match self.fetch_cover(url).await {
                Ok(picture) => {
                    let status = CoverArtStatus::Embedded {
                        mime_type: picture
                            .mime_type()
                            .map(|m| m.as_str().to_string())
                            .unwrap_or_else(|| "image/jpeg".to_string()),
                        size_bytes: picture.data().len(),
                    };
                    (Some(picture), status)
                }
                Err(reason) => {
                    warn!(url, error = %reason, "Skipping cover art");
                    (None, CoverArtStatus::Skipped { reason })
                }
            },
        };

        let outcome = TagOutcome {
            written: true,
            title_set: title.is_some(),
            artist_set: artist.is_some(),
            cover_art,
        };

        let owned: PathBuf = path.to_path_buf();
        let write = TagWrite {
            title,
            artist,
            cover,
        };

        tokio::task::spawn_blocking(move || write_tags(&owned, write))
            .await
            .map_err(|e| TaggingError::Task(e.to_string()))??;

        debug!(path = %path.display(), outcome = outcome.label(), "Tagged file");
        Ok(outcome)
    }
}

/// Tagger used when tagging is disabled. Leaves files untouched.
#[derive(Debug, Default)]
pub struct NoopTagger;

#[async_trait]
impl MetadataTagger for NoopTagger {
    fn name(&self) -> &str {
        "none"
    }

    async fn tag(&self, _path: &Path, _info: &MediaInfo) -> Result<TagOutcome, TaggingError> {
        Ok(TagOutcome::untouched())
    }
}
