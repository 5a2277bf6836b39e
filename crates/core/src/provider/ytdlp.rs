//! yt-dlp based provider implementation.

use async_trait::async_trait;
use regex_lite::Regex;
use serde::Deserialize;
use std::path::Path;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;
use tokio::time::{timeout, Duration};
use tracing::debug;

use super::config::ProviderConfig;
use super::error::ProviderError;
use super::traits::MediaProvider;
use super::types::{DownloadOutput, DownloadRequest, MediaInfo, RawEntry};
use crate::metrics::PROVIDER_DURATION;

/// Provider backed by the `yt-dlp` command line tool.
pub struct YtDlpProvider {
    config: ProviderConfig,
}

impl YtDlpProvider {
    /// Creates a new provider with the given configuration.
    pub fn new(config: ProviderConfig) -> Self {
        Self { config }
    }

    /// Creates a provider with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ProviderConfig::default())
    }

    /// Builds arguments for a flat search.
    fn build_search_args(&self, query: &str, limit: u32) -> Vec<String> {
        let mut args = vec![
            "--flat-playlist".to_string(),
            "--dump-single-json".to_string(),
            "--ignore-errors".to_string(),
            "--no-warnings".to_string(),
            "--default-search".to_string(),
            "ytsearch".to_string(),
        ];

        args.extend(self.config.extra_args.iter().cloned());

        args.push(format!("ytsearch{}:{}", limit, query));
        args
    }

    /// Builds arguments for a download with audio extraction.
    fn build_download_args(&self, request: &DownloadRequest) -> Vec<String> {
        // yt-dlp picks the final extension itself, so hand it the stem.
        let template = format!(
            "{}.%(ext)s",
            request.output_path.with_extension("").to_string_lossy()
        );

        let mut args = vec![
            "-f".to_string(),
            "bestaudio/best".to_string(),
            "-x".to_string(),
            "--audio-format".to_string(),
            request.audio.format.codec_name().to_string(),
            "--audio-quality".to_string(),
            format!("{}K", request.audio.bitrate_kbps),
            "-o".to_string(),
            template,
            "--no-playlist".to_string(),
            "--dump-json".to_string(),
            "--no-simulate".to_string(),
            "--quiet".to_string(),
            "--no-warnings".to_string(),
        ];

        if let Some(ref location) = self.config.ffmpeg_location {
            args.extend([
                "--ffmpeg-location".to_string(),
                location.to_string_lossy().to_string(),
            ]);
        }

        args.extend(self.config.extra_args.iter().cloned());

        // Keep the URL from being read as an option.
        args.push("--".to_string());
        args.push(request.url.clone());
        args
    }

    /// Parses the playlist JSON produced by a flat search.
    fn parse_search_output(output: &str) -> Result<Vec<Option<RawEntry>>, ProviderError> {
        #[derive(Deserialize)]
        struct Playlist {
            #[serde(default)]
            entries: Option<Vec<Option<RawEntry>>>,
        }

        let trimmed = output.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(Vec::new());
        }

        let playlist: Playlist = serde_json::from_str(trimmed)
            .map_err(|e| ProviderError::parse(format!("invalid search JSON: {}", e)))?;

        Ok(playlist.entries.unwrap_or_default())
    }

    /// Parses the info JSON printed before a download.
    fn parse_download_output(output: &str) -> Result<MediaInfo, ProviderError> {
        let line = output
            .lines()
            .map(str::trim)
            .find(|l| l.starts_with('{'))
            .ok_or_else(|| ProviderError::parse("no info JSON in provider output"))?;

        serde_json::from_str(line)
            .map_err(|e| ProviderError::parse(format!("invalid info JSON: {}", e)))
    }

    /// Extracts the most useful message from stderr.
    fn error_reason(stderr: &str) -> Option<String> {
        let re = Regex::new(r"(?m)^ERROR:\s*(.+)$").ok()?;
        re.captures_iter(stderr)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .last()
    }

    /// Runs yt-dlp with the given arguments and returns its stdout.
    async fn run(
        &self,
        operation: &str,
        args: &[String],
        timeout_secs: u64,
    ) -> Result<String, ProviderError> {
        let start = Instant::now();
        debug!(operation, args = ?args, "Running yt-dlp");

        let child = Command::new(&self.config.yt_dlp_path)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ProviderError::BinaryNotFound {
                        path: self.config.yt_dlp_path.clone(),
                    }
                } else {
                    ProviderError::Io(e)
                }
            })?;

        // Dropping the child on timeout kills it.
        let output = match timeout(Duration::from_secs(timeout_secs), child.wait_with_output()).await
        {
            Ok(result) => result?,
            Err(_) => return Err(ProviderError::Timeout { timeout_secs }),
        };

        PROVIDER_DURATION
            .with_label_values(&[operation])
            .observe(start.elapsed().as_secs_f64());

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            let reason = Self::error_reason(&stderr)
                .unwrap_or_else(|| format!("yt-dlp exited with code: {:?}", output.status.code()));
            return Err(ProviderError::failed(
                reason,
                if stderr.is_empty() { None } else { Some(stderr) },
            ));
        }

        Ok(stdout)
    }

    async fn ensure_output(path: &Path) -> Result<(), ProviderError> {
        match tokio::fs::try_exists(path).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(ProviderError::OutputMissing {
                path: path.to_path_buf(),
            }),
            Err(e) => Err(ProviderError::Io(e)),
        }
    }
}

#[async_trait]
impl MediaProvider for YtDlpProvider {
    fn name(&self) -> &str {
        "yt-dlp"
    }

    async fn search(&self, query: &str, limit: u32) -> Result<Vec<Option<RawEntry>>, ProviderError> {
        let args = self.build_search_args(query, limit);
        let stdout = self
            .run("search", &args, self.config.search_timeout_secs)
            .await?;
        Self::parse_search_output(&stdout)
    }

    async fn download(&self, request: DownloadRequest) -> Result<DownloadOutput, ProviderError> {
        let args = self.build_download_args(&request);
        let stdout = self
            .run("download", &args, self.config.download_timeout_secs)
            .await?;

        let info = Self::parse_download_output(&stdout)?;
        Self::ensure_output(&request.output_path).await?;

        Ok(DownloadOutput {
            path: request.output_path,
            info,
        })
    }

    async fn validate(&self) -> Result<(), ProviderError> {
        let output = Command::new(&self.config.yt_dlp_path)
            .arg("--version")
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ProviderError::BinaryNotFound {
                        path: self.config.yt_dlp_path.clone(),
                    }
                } else {
                    ProviderError::Io(e)
                }
            })?;

        if !output.status.success() {
            return Err(ProviderError::failed(
                format!("yt-dlp --version exited with code: {:?}", output.status.code()),
                None,
            ));
        }

        debug!(
            version = %String::from_utf8_lossy(&output.stdout).trim(),
            "yt-dlp available"
        );
        Ok(())
    }
}
