// Test fixtures: in-memory repository and on-disk data trees
use crate::application::observation_repository::{ObservationRepository, RepositoryError};
use crate::domain::catalog::{Catalog, CatalogBuilder};
use crate::domain::observation::{Observation, ObservationKey};
use crate::infrastructure::observation_parser::parse_observations;
use async_trait::async_trait;
use chrono::Utc;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Write `content` to `root/relative`, creating parent directories
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[derive(Default)]
pub struct InMemoryRepository {
    files: Mutex<Vec<(ObservationKey, String)>>,
    failing: AtomicBool,
}

impl InMemoryRepository {
    pub fn with_files(files: Vec<(ObservationKey, &str)>) -> Self {
        let repo = Self::default();
        for (key, content) in files {
            repo.add_file(key, content);
        }
        repo
    }

    pub fn add_file(&self, key: ObservationKey, content: &str) {
        self.files.lock().unwrap().push((key, content.to_string()));
    }

    /// Make every later scan fail as if the data root had disappeared
    pub fn fail_scans(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ObservationRepository for InMemoryRepository {
    async fn scan(&self) -> Result<Catalog, RepositoryError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepositoryError::RootUnreadable {
                path: PathBuf::from("memory"),
                source: io::Error::from(io::ErrorKind::NotFound),
            });
        }

        let mut builder = CatalogBuilder::default();
        for (key, _) in self.files.lock().unwrap().iter() {
            builder.record_file(key.clone());
        }
        Ok(builder.build(Utc::now()))
    }

    async fn load(&self, key: &ObservationKey) -> Result<Vec<Observation>, RepositoryError> {
        let path = key.relative_path();
        let content = self
            .files
            .lock()
            .unwrap()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, content)| content.clone())
            .ok_or_else(|| RepositoryError::NotFound(path.clone()))?;

        parse_observations(&content).map_err(|source| RepositoryError::Malformed { path, source })
    }
}
