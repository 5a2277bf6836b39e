//! Download, tag and finalize a single URL.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::fs::File;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::config::AcquisitionConfig;
use super::error::AcquisitionError;
use super::types::{AcquiredFile, AcquisitionJob, JobState, JobWarning};
use crate::metrics::{ACQUISITIONS_TOTAL, ACQUISITION_DURATION, TAGGING_TOTAL};
use crate::provider::{DownloadRequest, MediaInfo, MediaProvider, ProviderError};
use crate::storage::{FileLifecycleManager, WorkingFileGuard};
use crate::tagger::MetadataTagger;

/// File opened for delivery, before it is wrapped with the job.
struct Delivery {
    file: File,
    path: PathBuf,
    download_name: String,
    size_bytes: u64,
}

/// Runs acquisition jobs.
///
/// Each job writes to its own working file. On any failure every file the job
/// created is removed before the error is returned. If the future is dropped
/// mid-job, a [`WorkingFileGuard`] does the same.
pub struct AcquisitionPipeline {
    provider: Arc<dyn MediaProvider>,
    tagger: Arc<dyn MetadataTagger>,
    storage: FileLifecycleManager,
    config: AcquisitionConfig,
    download_permits: Semaphore,
}

impl AcquisitionPipeline {
    pub fn new(
        provider: Arc<dyn MediaProvider>,
        tagger: Arc<dyn MetadataTagger>,
        storage: FileLifecycleManager,
        config: AcquisitionConfig,
    ) -> Self {
        let permits = config.max_concurrent_downloads.max(1);
        Self {
            provider,
            tagger,
            storage,
            config,
            download_permits: Semaphore::new(permits),
        }
    }

    pub fn storage(&self) -> &FileLifecycleManager {
        &self.storage
    }

    /// Acquires `url` with no external cancellation.
    pub async fn acquire(&self, url: &str) -> Result<AcquiredFile, AcquisitionError> {
        self.acquire_with_cancel(url, CancellationToken::new()).await
    }

    /// Acquires `url`, aborting the download when `cancel` fires.
    pub async fn acquire_with_cancel(
        &self,
        url: &str,
        cancel: CancellationToken,
    ) -> Result<AcquiredFile, AcquisitionError> {
        let start = Instant::now();
        let result = self.run(url, &cancel).await;

        let label = match &result {
            Ok(_) => "success",
            Err(e) => e.kind(),
        };
        ACQUISITIONS_TOTAL.with_label_values(&[label]).inc();
        ACQUISITION_DURATION
            .with_label_values(&[label])
            .observe(start.elapsed().as_secs_f64());

        result
    }

    async fn run(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<AcquiredFile, AcquisitionError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(AcquisitionError::missing_url());
        }

        self.storage.ensure_output_dir().await?;

        let working = self.storage.allocate_working_path();
        let mut job = AcquisitionJob::new(url, working.clone());
        let mut guard = WorkingFileGuard::new();
        guard.track_with_artifacts(&working);

        info!(job_id = %job.id, url, working = %working.display(), "Starting acquisition");

        match self.drive(&mut job, &mut guard, cancel).await {
            Ok(delivery) => {
                guard.disarm();
                job.transition(JobState::Finalized);
                info!(
                    job_id = %job.id,
                    path = %delivery.path.display(),
                    size = delivery.size_bytes,
                    warnings = job.warnings.len(),
                    "Acquisition finalized"
                );
                Ok(AcquiredFile {
                    file: delivery.file,
                    path: delivery.path,
                    download_name: delivery.download_name,
                    content_type: "audio/mpeg",
                    size_bytes: delivery.size_bytes,
                    job,
                })
            }
            Err(e) => {
                job.transition(JobState::Failed);

                let report = self.storage.cleanup(&guard.pending()).await;
                guard.disarm();
                for failure in report.failures {
                    job.warn(JobWarning::CleanupFailed {
                        path: failure.path,
                        reason: failure.error,
                    });
                }

                warn!(
                    job_id = %job.id,
                    url,
                    error = %e,
                    removed = report.removed.len(),
                    warnings = job.warnings.len(),
                    "Acquisition failed"
                );
                Err(e)
            }
        }
    }

    async fn drive(
        &self,
        job: &mut AcquisitionJob,
        guard: &mut WorkingFileGuard,
        cancel: &CancellationToken,
    ) -> Result<Delivery, AcquisitionError> {
        job.transition(JobState::Downloading);
        let (path, info) = self.download(job, guard, cancel).await?;
        job.media_info = Some(info.clone());

        job.transition(JobState::Tagging);
        self.tag(job, &path, &info).await;

        let desired = self.storage.final_path_for(info.title.as_deref());
        job.final_path = Some(desired.clone());

        let finalized = self.storage.finalize(&path, &desired).await;
        if let Some(reason) = finalized.fallback_reason.clone() {
            job.warn(JobWarning::FinalizeFallback { reason });
        } else {
            guard.release(&path);
            guard.track(&desired);
        }

        let download_name = finalized
            .file_name()
            .unwrap_or_else(|| self.storage.final_name_for(info.title.as_deref()));

        let file = File::open(&finalized.path)
            .await
            .map_err(AcquisitionError::Delivery)?;
        let size_bytes = file
            .metadata()
            .await
            .map_err(AcquisitionError::Delivery)?
            .len();

        Ok(Delivery {
            file,
            path: finalized.path,
            download_name,
            size_bytes,
        })
    }

    async fn download(
        &self,
        job: &AcquisitionJob,
        guard: &mut WorkingFileGuard,
        cancel: &CancellationToken,
    ) -> Result<(PathBuf, MediaInfo), AcquisitionError> {
        let _permit = tokio::select! {
            permit = self.download_permits.acquire() => {
                permit.map_err(|_| ProviderError::Cancelled)?
            }
            _ = cancel.cancelled() => return Err(ProviderError::Cancelled.into()),
        };

        let request = DownloadRequest::mp3(
            job.requested_url.clone(),
            job.working_path.clone(),
            self.config.bitrate_kbps,
        );

        debug!(job_id = %job.id, provider = self.provider.name(), "Downloading");

        // Dropping the download future kills the provider process.
        let output = tokio::select! {
            result = self.provider.download(request) => result?,
            _ = cancel.cancelled() => return Err(ProviderError::Cancelled.into()),
        };

        if output.path != job.working_path {
            guard.track(&output.path);
        }

        Ok((output.path, output.info))
    }

    /// Tags the file. Never fails the job.
    async fn tag(&self, job: &mut AcquisitionJob, path: &Path, info: &MediaInfo) {
        match self.tagger.tag(path, info).await {
            Ok(outcome) => {
                TAGGING_TOTAL.with_label_values(&[outcome.label()]).inc();
                if let Some(reason) = outcome.cover_skip_reason() {
                    job.warn(JobWarning::CoverArtSkipped {
                        reason: reason.to_string(),
                    });
                }
            }
            Err(e) => {
                TAGGING_TOTAL.with_label_values(&["failed"]).inc();
                warn!(job_id = %job.id, path = %path.display(), error = %e, "Tagging failed, continuing untagged");
                job.warn(JobWarning::TaggingFailed {
                    reason: e.to_string(),
                });
            }
        }
    }
}
