use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tubetag_core::{
    create_provider, create_tagger, load_config, validate_config, AcquisitionPipeline,
    FileLifecycleManager, MediaProvider, SearchOrchestrator,
};
use tubetag_server::{api::create_router, state::AppState};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    init_logging();

    // Determine config path
    let config_path = std::env::var("TUBETAG_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    validate_config(&config).context("Configuration validation failed")?;
    info!(version = VERSION, "Configuration loaded successfully");
    info!("Output directory: {:?}", config.storage.output_dir);

    // Provider
    let provider: Arc<dyn MediaProvider> = Arc::from(create_provider(&config.provider));
    match provider.validate().await {
        Ok(()) => info!("Using provider: {}", provider.name()),
        // Keep serving: the binary may be installed after startup.
        Err(e) => warn!(provider = provider.name(), error = %e, "Provider check failed"),
    }

    // Tagger
    let tagger = create_tagger(&config.tagger).context("Failed to create tagger")?;
    info!("Using tagger: {}", tagger.name());

    // Storage and pipelines
    let storage = FileLifecycleManager::new(config.storage.clone());
    storage
        .ensure_output_dir()
        .await
        .context("Failed to create output directory")?;

    let search = SearchOrchestrator::new(Arc::clone(&provider), config.search.clone());
    let acquisition =
        AcquisitionPipeline::new(provider, tagger, storage, config.acquisition.clone());
    info!(
        max_concurrent_downloads = config.acquisition.max_concurrent_downloads,
        bitrate_kbps = config.acquisition.bitrate_kbps,
        "Acquisition pipeline ready"
    );

    let addr = SocketAddr::new(config.server.host, config.server.port);
    let state = Arc::new(AppState::new(config, search, acquisition));
    let app = create_router(Arc::clone(&state));

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    let shutdown = state.shutdown_token().clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            info!("Shutdown signal received, cancelling in-flight downloads");
            shutdown.cancel();
        })
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

/// Set up the tracing subscriber. `TUBETAG_LOG_FORMAT=json` selects JSON output.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    let json = matches!(std::env::var("TUBETAG_LOG_FORMAT").as_deref(), Ok("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
