// Repository trait for pollen observation data access
use crate::domain::catalog::Catalog;
use crate::domain::observation::{Observation, ObservationKey};
use crate::infrastructure::observation_parser::ParseError;
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("data root {path} is not readable: {source}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("observation file {0} not found")]
    NotFound(PathBuf),
    #[error("observation file {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[async_trait]
pub trait ObservationRepository: Send + Sync {
    /// Walk the data source and index every observation file it holds
    async fn scan(&self) -> Result<Catalog, RepositoryError>;

    /// Load the rows of one observation file, in file order
    async fn load(&self, key: &ObservationKey) -> Result<Vec<Observation>, RepositoryError>;
}
