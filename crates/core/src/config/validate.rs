use super::{types::Config, ConfigError};
use crate::storage::sanitize_title;

/// Validate configuration
///
/// Rejects values that would make the service unusable at runtime: a zero port,
/// an empty output directory or fallback name, zero timeouts or limits, and a
/// default result count larger than the configured ceiling.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(invalid("server.port cannot be 0"));
    }

    if config.storage.output_dir.as_os_str().is_empty() {
        return Err(invalid("storage.output_dir cannot be empty"));
    }

    let fallback = &config.storage.fallback_name;
    if sanitize_title(fallback).is_empty() {
        return Err(invalid(
            "storage.fallback_name must contain at least one alphanumeric character",
        ));
    }
    if sanitize_title(fallback) != *fallback {
        return Err(invalid(
            "storage.fallback_name may only contain letters, digits, spaces, '-' and '_'",
        ));
    }

    if config.provider.search_timeout_secs == 0 {
        return Err(invalid("provider.search_timeout_secs cannot be 0"));
    }

    if config.provider.download_timeout_secs == 0 {
        return Err(invalid("provider.download_timeout_secs cannot be 0"));
    }

    if config.search.max_results_limit == 0 {
        return Err(invalid("search.max_results_limit cannot be 0"));
    }

    if config.search.default_max_results == 0
        || config.search.default_max_results > config.search.max_results_limit
    {
        return Err(invalid(&format!(
            "search.default_max_results must be between 1 and {}",
            config.search.max_results_limit
        )));
    }

    if config.acquisition.bitrate_kbps == 0 {
        return Err(invalid("acquisition.bitrate_kbps cannot be 0"));
    }

    if config.acquisition.max_concurrent_downloads == 0 {
        return Err(invalid("acquisition.max_concurrent_downloads cannot be 0"));
    }

    if config.tagger.artwork_timeout_secs == 0 {
        return Err(invalid("tagger.artwork_timeout_secs cannot be 0"));
    }

    Ok(())
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::ValidationError(message.to_string())
}
