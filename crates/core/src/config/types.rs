use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

use crate::acquisition::AcquisitionConfig;
use crate::provider::ProviderConfig;
use crate::search::SearchConfig;
use crate::storage::StorageConfig;
use crate::tagger::TaggerConfig;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub acquisition: AcquisitionConfig,
    #[serde(default)]
    pub tagger: TaggerConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderBackend;

    #[test]
    fn test_deserialize_server_section() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 9000
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host.to_string(), "127.0.0.1");
    }

    #[test]
    fn test_deserialize_with_default_server() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host.to_string(), "0.0.0.0");
    }

    #[test]
    fn test_deserialize_with_default_storage() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.storage.output_dir.to_str().unwrap(), "downloads");
        assert_eq!(config.storage.fallback_name, "audio");
    }

    #[test]
    fn test_deserialize_provider_section() {
        let toml = r#"
[provider]
backend = "yt_dlp"
ffmpeg_location = "/usr/local/bin"
download_timeout_secs = 120
extra_args = ["--force-ipv4"]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.provider.backend, ProviderBackend::YtDlp);
        assert_eq!(
            config.provider.ffmpeg_location.as_deref().unwrap().to_str(),
            Some("/usr/local/bin")
        );
        assert_eq!(config.provider.download_timeout_secs, 120);
        assert_eq!(config.provider.search_timeout_secs, 60);
        assert_eq!(config.provider.extra_args, vec!["--force-ipv4".to_string()]);
    }

    #[test]
    fn test_deserialize_search_and_acquisition_sections() {
        let toml = r#"
[search]
max_results_limit = 25

[acquisition]
bitrate_kbps = 320
max_concurrent_downloads = 2

[tagger]
enabled = false
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.search.max_results_limit, 25);
        assert_eq!(config.search.default_max_results, 10);
        assert_eq!(config.acquisition.bitrate_kbps, 320);
        assert_eq!(config.acquisition.max_concurrent_downloads, 2);
        assert!(!config.tagger.enabled);
    }

    #[test]
    fn test_config_serializes_to_json() {
        let config = Config::default();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["server"]["port"], 8080);
        assert_eq!(json["provider"]["backend"], "yt_dlp");
    }
}
