use tokio_util::sync::CancellationToken;
use tubetag_core::{AcquisitionPipeline, Config, SearchOrchestrator};

/// Shared application state
pub struct AppState {
    config: Config,
    search: SearchOrchestrator,
    acquisition: AcquisitionPipeline,
    /// Cancelled on shutdown so in-flight downloads stop and clean up.
    shutdown: CancellationToken,
}

impl AppState {
    pub fn new(config: Config, search: SearchOrchestrator, acquisition: AcquisitionPipeline) -> Self {
        Self {
            config,
            search,
            acquisition,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn search(&self) -> &SearchOrchestrator {
        &self.search
    }

    pub fn acquisition(&self) -> &AcquisitionPipeline {
        &self.acquisition
    }

    pub fn shutdown_token(&self) -> &CancellationToken {
        &self.shutdown
    }
}
