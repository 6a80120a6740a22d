// Application state for HTTP handlers
use crate::application::catalog_service::CatalogService;
use crate::application::chart_service::ChartService;

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: CatalogService,
    pub chart_service: ChartService,
}
