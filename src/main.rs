//! Content Studio server entry point.

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use content_studio::adapters::http::{app, AppState};
use content_studio::adapters::{JsonFileStore, SampleStrategyAnalyzer};
use content_studio::application::Dataset;
use content_studio::config::AppConfig;
use content_studio::domain::library::ContentLibrary;
use content_studio::domain::strategy::StrategyData;
use content_studio::domain::visual::VisualLibrary;
use content_studio::ports::RecordStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let content_store: Arc<dyn RecordStore<ContentLibrary>> =
        Arc::new(JsonFileStore::<ContentLibrary>::new(config.storage.content_path()));
    let strategy_store: Arc<dyn RecordStore<StrategyData>> =
        Arc::new(JsonFileStore::<StrategyData>::new(config.storage.strategy_path()));
    let visual_store: Arc<dyn RecordStore<VisualLibrary>> =
        Arc::new(JsonFileStore::<VisualLibrary>::new(config.storage.visual_path()));

    let content = Arc::new(Dataset::load(content_store).await?);
    let strategies = Arc::new(Dataset::load(strategy_store).await?);
    let visuals = Arc::new(Dataset::load(visual_store).await?);
    tracing::info!(data_dir = %config.storage.data_dir.display(), "Datasets loaded");

    let state = AppState::new(
        content,
        strategies,
        visuals,
        Arc::new(SampleStrategyAnalyzer::new()),
        &config.generation,
    );
    let router = app(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        "Content studio listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured filter. JSON output in production.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
