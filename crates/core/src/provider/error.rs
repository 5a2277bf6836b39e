//! Error types for the provider module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while searching or downloading through a provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Provider binary not found.
    #[error("Provider binary not found at path: {path}")]
    BinaryNotFound { path: PathBuf },

    /// The provider ran but reported a failure.
    #[error("{reason}")]
    Failed {
        reason: String,
        stderr: Option<String>,
    },

    /// The provider did not finish in time.
    #[error("Provider timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// The provider produced output that could not be understood.
    #[error("Failed to parse provider output: {reason}")]
    ParseError { reason: String },

    /// The provider reported success but the expected file is missing.
    #[error("Provider did not produce the expected file: {path}")]
    OutputMissing { path: PathBuf },

    /// I/O error while talking to the provider.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The operation was cancelled by the caller.
    #[error("Provider operation cancelled")]
    Cancelled,
}

impl ProviderError {
    /// Creates a failed error with optional stderr output.
    pub fn failed(reason: impl Into<String>, stderr: Option<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
            stderr,
        }
    }

    /// Creates a parse error.
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::ParseError {
            reason: reason.into(),
        }
    }

    /// Whether this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Io(_))
    }

    /// Short label for metrics and structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BinaryNotFound { .. } => "binary_not_found",
            Self::Failed { .. } => "failed",
            Self::Timeout { .. } => "timeout",
            Self::ParseError { .. } => "parse_error",
            Self::OutputMissing { .. } => "output_missing",
            Self::Io(_) => "io",
            Self::Cancelled => "cancelled",
        }
    }
}
