pub mod acquisition;
pub mod config;
pub mod metrics;
pub mod provider;
pub mod search;
pub mod storage;
pub mod tagger;
pub mod testing;

pub use acquisition::{
    AcquiredFile, AcquisitionConfig, AcquisitionError, AcquisitionJob, AcquisitionPipeline,
    JobState, JobWarning,
};
pub use config::{load_config, load_config_from_str, validate_config, Config, ConfigError};
pub use provider::{create_provider, MediaInfo, MediaProvider, ProviderConfig, ProviderError};
pub use search::{
    select_best_thumbnail, SearchConfig, SearchError, SearchOrchestrator, SearchOutcome,
    SearchRequest, SearchResultItem, ThumbnailCandidate,
};
pub use storage::{sanitize_title, FileLifecycleManager, StorageConfig, WorkingFileGuard};
pub use tagger::{create_tagger, MetadataTagger, TagOutcome, TaggerConfig, TaggingError};
