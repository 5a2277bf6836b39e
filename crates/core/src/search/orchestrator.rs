//! Search orchestration.

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::config::SearchConfig;
use super::error::SearchError;
use super::types::{SearchOutcome, SearchRequest, SearchResultItem};
use crate::metrics::{SEARCHES_TOTAL, SEARCH_RESULTS};
use crate::provider::MediaProvider;

/// Validates search requests, queries the provider and normalizes results.
pub struct SearchOrchestrator {
    provider: Arc<dyn MediaProvider>,
    config: SearchConfig,
}

impl SearchOrchestrator {
    pub fn new(provider: Arc<dyn MediaProvider>, config: SearchConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs a search.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchOutcome, SearchError> {
        let result = self.run(request).await;

        match &result {
            Ok(outcome) => {
                SEARCHES_TOTAL.with_label_values(&["success"]).inc();
                SEARCH_RESULTS.observe(outcome.results_count as f64);
            }
            Err(e) => {
                SEARCHES_TOTAL.with_label_values(&[e.kind()]).inc();
            }
        }

        result
    }

    /// Shorthand for [`search`](Self::search) with plain arguments.
    pub async fn search_query(
        &self,
        query: &str,
        max_results: Option<i64>,
    ) -> Result<SearchOutcome, SearchError> {
        let request = SearchRequest {
            query: query.to_string(),
            max_results,
        };
        self.search(&request).await
    }

    async fn run(&self, request: &SearchRequest) -> Result<SearchOutcome, SearchError> {
        let query = request.query.trim();
        if query.is_empty() {
            return Err(SearchError::missing_query());
        }

        let limit = self.config.effective_limit(request.max_results);
        info!(query = %query, limit, provider = self.provider.name(), "Searching");

        let entries = self.provider.search(query, limit).await.map_err(|e| {
            warn!(query = %query, error = %e, kind = e.kind(), "Search failed");
            e
        })?;

        let total = entries.len();
        let videos: Vec<SearchResultItem> = entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let item = entry.as_ref().and_then(SearchResultItem::from_raw);
                if item.is_none() {
                    debug!(index, "Skipping unavailable search entry");
                }
                item
            })
            .collect();

        debug!(
            query = %query,
            returned = total,
            kept = videos.len(),
            "Search complete"
        );

        Ok(SearchOutcome::new(request.query.clone(), videos))
    }
}
