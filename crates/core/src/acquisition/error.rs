//! Error types for the acquisition pipeline.

use thiserror::Error;

use crate::provider::ProviderError;
use crate::storage::StorageError;

/// Errors that end an acquisition job.
///
/// Tagging, finalize and cleanup problems are not here: they are recovered
/// inside the pipeline and reported as warnings.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    /// The request itself is unusable.
    #[error("{0}")]
    Validation(String),

    /// The output directory could not be prepared.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The provider failed to fetch or transcode.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The finished file could not be opened for the response.
    #[error("Failed to open finished file: {0}")]
    Delivery(#[source] std::io::Error),
}

impl AcquisitionError {
    /// Error for a missing or blank URL.
    pub fn missing_url() -> Self {
        Self::Validation("URL parameter is required".to_string())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::Storage(_) => "storage_error",
            Self::Provider(_) => "provider_error",
            Self::Delivery(_) => "delivery_error",
        }
    }
}
