// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_catalog, get_chart, get_options, health_check, index, refresh_catalog,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .route("/api/catalog", get(get_catalog))
        .route("/api/catalog/refresh", post(refresh_catalog))
        .route("/api/options", get(get_options))
        .route("/api/chart", get(get_chart))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
