//! Configuration for the tagger module.

use serde::{Deserialize, Serialize};

/// Metadata tagging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggerConfig {
    /// Whether downloaded files get tagged at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Timeout for fetching cover art in seconds.
    #[serde(default = "default_artwork_timeout")]
    pub artwork_timeout_secs: u64,

    /// User agent sent when fetching cover art.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_true() -> bool {
    true
}

fn default_artwork_timeout() -> u64 {
    15
}

fn default_user_agent() -> String {
    format!("tubetag/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            artwork_timeout_secs: default_artwork_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl TaggerConfig {
    /// Config with tagging turned off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }
}
