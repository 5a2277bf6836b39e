//! Search over the media provider.
//!
//! A search takes a free-text query and an optional result count, asks the
//! provider for a flat listing, and normalizes each entry into a
//! [`SearchResultItem`]. Unavailable entries are dropped silently.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tubetag_core::provider::{create_provider, ProviderConfig};
//! use tubetag_core::search::{SearchConfig, SearchOrchestrator};
//!
//! let provider = Arc::from(create_provider(&ProviderConfig::default()));
//! let orchestrator = SearchOrchestrator::new(provider, SearchConfig::default());
//!
//! let outcome = orchestrator.search_query("lofi beats", Some(5)).await?;
//! for video in &outcome.videos {
//!     println!("{} {:?}", video.id, video.title);
//! }
//! ```

mod config;
mod error;
mod orchestrator;
mod thumbnail;
mod types;

pub use config::SearchConfig;
pub use error::SearchError;
pub use orchestrator::SearchOrchestrator;
pub use thumbnail::{select_best_thumbnail, ThumbnailCandidate};
pub use types::{SearchOutcome, SearchRequest, SearchResultItem};
