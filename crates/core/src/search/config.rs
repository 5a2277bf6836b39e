//! Configuration for the search module.

use serde::{Deserialize, Serialize};

/// Limits applied to search requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Result count used when the request does not specify one.
    #[serde(default = "default_max_results")]
    pub default_max_results: u32,

    /// Upper bound a request is clamped to.
    #[serde(default = "default_max_results_limit")]
    pub max_results_limit: u32,
}

fn default_max_results() -> u32 {
    10
}

fn default_max_results_limit() -> u32 {
    50
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_max_results: default_max_results(),
            max_results_limit: default_max_results_limit(),
        }
    }
}

impl SearchConfig {
    /// Resolves the requested count to the number actually asked of the provider.
    pub fn effective_limit(&self, requested: Option<i64>) -> u32 {
        let limit = self.max_results_limit.max(1);
        match requested {
            None => self.default_max_results.clamp(1, limit),
            Some(n) => n.clamp(1, i64::from(limit)) as u32,
        }
    }
}
