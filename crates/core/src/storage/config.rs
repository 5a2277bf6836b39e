//! Configuration for the storage module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where acquired files live and how they are named.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding working and final files.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Name used when a title sanitizes to nothing.
    #[serde(default = "default_fallback_name")]
    pub fallback_name: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("downloads")
}

fn default_fallback_name() -> String {
    "audio".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            fallback_name: default_fallback_name(),
        }
    }
}

impl StorageConfig {
    /// Creates a config rooted at the given directory.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// Sets the fallback file name.
    pub fn with_fallback_name(mut self, name: impl Into<String>) -> Self {
        self.fallback_name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StorageConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("downloads"));
        assert_eq!(config.fallback_name, "audio");
    }

    #[test]
    fn test_config_from_toml_partial() {
        let config: StorageConfig = toml::from_str(r#"output_dir = "/srv/audio""#).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/srv/audio"));
        assert_eq!(config.fallback_name, "audio");
    }
}
