//! Error types for the search module.

use thiserror::Error;

use crate::provider::ProviderError;

/// Errors returned by a search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The request itself is unusable.
    #[error("{0}")]
    Validation(String),

    /// The provider failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl SearchError {
    /// Error for a missing or blank query.
    pub fn missing_query() -> Self {
        Self::Validation("Search query is required".to_string())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::Provider(_) => "provider_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            SearchError::missing_query().to_string(),
            "Search query is required"
        );

        let err = SearchError::from(ProviderError::failed("ERROR: rate limited", None));
        assert_eq!(err.to_string(), "ERROR: rate limited");
        assert!(!err.is_validation());
    }
}
