// HTTP request handlers
use crate::domain::catalog::Catalog;
use crate::domain::chart::Rendering;
use crate::domain::selection::{Selection, StageOptions};
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use std::sync::Arc;

/// Dashboard page; the dropdown cascade and chart drawing run client-side against the JSON API
const INDEX_HTML: &str = include_str!("../../templates/index.html");

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Dashboard page with the four cascading dropdowns
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Full catalog: every city, year, month and plant currently known
pub async fn get_catalog(State(state): State<Arc<AppState>>) -> Json<Catalog> {
    let catalog = state.catalog_service.current().await;
    Json(catalog.as_ref().clone())
}

/// Rescan the data directory and return the new catalog
pub async fn refresh_catalog(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Catalog>, ApiError> {
    let catalog = state.catalog_service.refresh().await?;
    tracing::info!("Catalog refreshed: {} cities", catalog.cities.len());
    Ok(Json(catalog.as_ref().clone()))
}

/// Options for the next dropdown given the values chosen so far
pub async fn get_options(
    Query(selection): Query<Selection>,
    State(state): State<Arc<AppState>>,
) -> Json<StageOptions> {
    Json(state.catalog_service.options(&selection).await)
}

/// Chart (or no-data message) for the selected city, plant, year and month
pub async fn get_chart(
    Query(selection): Query<Selection>,
    State(state): State<Arc<AppState>>,
) -> Json<Rendering> {
    Json(state.chart_service.render(&selection).await)
}
