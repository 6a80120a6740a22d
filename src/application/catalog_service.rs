// Catalog service - Holds the current catalog snapshot and answers cascade queries
use crate::application::observation_repository::{ObservationRepository, RepositoryError};
use crate::domain::catalog::Catalog;
use crate::domain::selection::{next_options, Selection, StageOptions};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn ObservationRepository>,
    snapshot: Arc<RwLock<Arc<Catalog>>>,
    rescan_on_query: bool,
}

impl CatalogService {
    /// Scan once and keep the result as the initial snapshot.
    pub async fn load(
        repository: Arc<dyn ObservationRepository>,
        rescan_on_query: bool,
    ) -> Result<Self, RepositoryError> {
        let catalog = repository.scan().await?;
        Ok(Self {
            repository,
            snapshot: Arc::new(RwLock::new(Arc::new(catalog))),
            rescan_on_query,
        })
    }

    /// The catalog to answer queries from. When configured to rescan, a failed
    /// rescan falls back to the previous snapshot.
    pub async fn current(&self) -> Arc<Catalog> {
        if self.rescan_on_query {
            match self.refresh().await {
                Ok(catalog) => return catalog,
                Err(e) => tracing::warn!("Rescan failed, serving previous catalog: {}", e),
            }
        }
        self.snapshot.read().await.clone()
    }

    /// Rescan the data source and replace the snapshot. The old snapshot is kept on error.
    pub async fn refresh(&self) -> Result<Arc<Catalog>, RepositoryError> {
        let catalog = Arc::new(self.repository.scan().await?);
        *self.snapshot.write().await = catalog.clone();
        tracing::debug!("Catalog refreshed at {}", catalog.scanned_at);
        Ok(catalog)
    }

    pub async fn options(&self, selection: &Selection) -> StageOptions {
        let catalog = self.current().await;
        next_options(&catalog, selection)
    }
}
