//! Metadata tagging for produced audio files.
//!
//! After a download the tagger writes the reported title and uploader into
//! the file's native tag and, when a thumbnail URL is known, embeds the image
//! as front cover art. Cover art failures never fail tagging.
//!
//! # Example
//!
//! ```ignore
//! use tubetag_core::tagger::{create_tagger, TaggerConfig};
//!
//! let tagger = create_tagger(&TaggerConfig::default())?;
//! let outcome = tagger.tag(path, &info).await?;
//! if let Some(reason) = outcome.cover_skip_reason() {
//!     println!("no cover: {}", reason);
//! }
//! ```

mod artwork;
mod config;
mod error;
mod lofty_tagger;
mod traits;
mod types;

use std::sync::Arc;

pub use artwork::HttpArtworkFetcher;
pub use config::TaggerConfig;
pub use error::TaggingError;
pub use lofty_tagger::{LoftyTagger, NoopTagger};
pub use traits::{ArtworkFetcher, MetadataTagger};
pub use types::{CoverArtStatus, TagOutcome};

/// Creates the tagger selected by the configuration.
pub fn create_tagger(config: &TaggerConfig) -> Result<Arc<dyn MetadataTagger>, TaggingError> {
    if !config.enabled {
        return Ok(Arc::new(NoopTagger));
    }

    let fetcher = HttpArtworkFetcher::new(config)?;
    Ok(Arc::new(LoftyTagger::new(Arc::new(fetcher))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tagger() {
        let tagger = create_tagger(&TaggerConfig::default()).unwrap();
        assert_eq!(tagger.name(), "lofty");

        let tagger = create_tagger(&TaggerConfig::disabled()).unwrap();
        assert_eq!(tagger.name(), "none");
    }
}
