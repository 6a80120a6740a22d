// Chart service - Resolves a selection to its observation file and renders it
use crate::application::observation_repository::{ObservationRepository, RepositoryError};
use crate::domain::chart::{ChartSpec, Rendering};
use crate::domain::selection::Selection;
use std::sync::Arc;

#[derive(Clone)]
pub struct ChartService {
    repository: Arc<dyn ObservationRepository>,
}

impl ChartService {
    pub fn new(repository: Arc<dyn ObservationRepository>) -> Self {
        Self { repository }
    }

    /// Render the chart for a selection. An incomplete selection yields an empty
    /// chart; a missing or malformed file yields the no-data message.
    pub async fn render(&self, selection: &Selection) -> Rendering {
        let Some(key) = selection.key() else {
            tracing::debug!("Selection incomplete at stage {:?}", selection.stage());
            return Rendering::chart(ChartSpec::empty());
        };

        match self.repository.load(&key).await {
            Ok(observations) => Rendering::chart(ChartSpec::bar(observations)),
            Err(e) => {
                match &e {
                    RepositoryError::NotFound(_) => tracing::debug!("{}", e),
                    RepositoryError::Malformed { .. } => tracing::warn!("{}", e),
                    _ => tracing::error!("{}", e),
                }
                Rendering::no_data()
            }
        }
    }
}
