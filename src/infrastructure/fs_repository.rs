// File system repository - observation files under <root>/<year>/<month>/
use crate::application::observation_repository::{ObservationRepository, RepositoryError};
use crate::domain::catalog::{Catalog, CatalogBuilder};
use crate::domain::observation::{parse_file_name, Observation, ObservationKey};
use crate::domain::plant::Plant;
use crate::infrastructure::observation_parser::parse_observations;
use async_trait::async_trait;
use chrono::Utc;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct FsObservationRepository {
    root: PathBuf,
}

#[derive(Debug)]
struct DirChild {
    name: String,
    path: PathBuf,
    is_dir: bool,
    is_file: bool,
}

impl FsObservationRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Children of `dir` sorted by name. Symlinks are followed; entries with
    /// non UTF-8 names or unreadable metadata are left out.
    async fn list_dir(dir: &Path) -> io::Result<Vec<DirChild>> {
        let mut read_dir = tokio::fs::read_dir(dir).await?;
        let mut children = Vec::new();

        while let Some(entry) = read_dir.next_entry().await? {
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            let path = entry.path();
            let Ok(metadata) = tokio::fs::metadata(&path).await else {
                continue;
            };
            children.push(DirChild {
                name,
                path,
                is_dir: metadata.is_dir(),
                is_file: metadata.is_file(),
            });
        }

        children.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(children)
    }

    /// Subdirectories of `dir` named by a number in canonical form (`9`, not `09`
    /// or `+9`), in numeric order. Only those names round-trip through
    /// `ObservationKey::relative_path`.
    async fn numbered_dirs<T>(dir: &Path) -> io::Result<Vec<(T, PathBuf)>>
    where
        T: FromStr + Ord + ToString,
    {
        let mut numbered = Vec::new();
        for child in Self::list_dir(dir).await? {
            if !child.is_dir {
                continue;
            }
            match child.name.parse::<T>() {
                Ok(n) if n.to_string() == child.name => numbered.push((n, child.path)),
                Ok(_) => tracing::warn!(
                    "Skipping non-canonical numbered directory {}",
                    child.path.display()
                ),
                Err(_) => tracing::debug!("Skipping non-numeric directory {}", child.path.display()),
            }
        }
        numbered.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(numbered)
    }

    async fn index_month(builder: &mut CatalogBuilder, dir: &Path, year: i32, month: u32) {
        let children = match Self::list_dir(dir).await {
            Ok(children) => children,
            Err(e) => {
                tracing::warn!("Skipping unreadable month directory {}: {}", dir.display(), e);
                return;
            }
        };

        for child in children.into_iter().filter(|c| c.is_file) {
            let Some((city, plant)) = parse_file_name(&child.name) else {
                tracing::debug!("Skipping file with unrecognised name {}", child.path.display());
                continue;
            };
            if plant.parse::<Plant>().is_err() {
                tracing::debug!("Indexing unlisted plant {} from {}", plant, child.path.display());
            }
            builder.record_file(ObservationKey::new(city, plant, year, month));
        }
    }
}

/// Rejects keys whose city or plant would escape the month directory.
fn is_path_safe(key: &ObservationKey) -> bool {
    !key.city.chars().chain(key.plant.chars()).any(std::path::is_separator)
}

#[async_trait]
impl ObservationRepository for FsObservationRepository {
    async fn scan(&self) -> Result<Catalog, RepositoryError> {
        let years = Self::numbered_dirs::<i32>(&self.root)
            .await
            .map_err(|source| RepositoryError::RootUnreadable {
                path: self.root.clone(),
                source,
            })?;

        let mut builder = CatalogBuilder::default();
        for (year, year_dir) in years {
            builder.record_year(year);

            let months = match Self::numbered_dirs::<u32>(&year_dir).await {
                Ok(months) => months,
                Err(e) => {
                    tracing::warn!("Skipping unreadable year directory {}: {}", year_dir.display(), e);
                    continue;
                }
            };

            for (month, month_dir) in months {
                if !(1..=12).contains(&month) {
                    tracing::debug!("Skipping out-of-range month directory {}", month_dir.display());
                    continue;
                }
                builder.record_month(month);
                Self::index_month(&mut builder, &month_dir, year, month).await;
            }
        }

        let catalog = builder.build(Utc::now());
        tracing::info!(
            "Indexed {}: {} cities, {} years, {} observation files",
            self.root.display(),
            catalog.cities.len(),
            catalog.years.len(),
            catalog.entries.len()
        );
        Ok(catalog)
    }

    async fn load(&self, key: &ObservationKey) -> Result<Vec<Observation>, RepositoryError> {
        let path = self.root.join(key.relative_path());
        if !is_path_safe(key) {
            return Err(RepositoryError::NotFound(path));
        }

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(RepositoryError::NotFound(path));
            }
            Err(source) => return Err(RepositoryError::Io { path, source }),
        };

        parse_observations(&content).map_err(|source| RepositoryError::Malformed { path, source })
    }
}
