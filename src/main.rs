// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::catalog_service::CatalogService;
use crate::application::chart_service::ChartService;
use crate::application::observation_repository::ObservationRepository;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::fs_repository::FsObservationRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pollen_dashboard=info,tower_http=info")),
        )
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Create repository (infrastructure layer)
    let fs_repository = FsObservationRepository::new(config.data.root.clone());
    tracing::info!("Reading pollen data from {}", fs_repository.root().display());
    let repository: Arc<dyn ObservationRepository> = Arc::new(fs_repository);

    // Create services (application layer); the initial scan must succeed
    let catalog_service =
        CatalogService::load(repository.clone(), config.catalog.rescan_on_query).await?;
    let chart_service = ChartService::new(repository);

    let state = Arc::new(AppState {
        catalog_service,
        chart_service,
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr = config.server.socket_addr()?;
    tracing::info!("Starting pollen-dashboard on http://{}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
