// JSON error responses
use crate::application::observation_repository::RepositoryError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("catalog scan failed: {0}")]
    Scan(#[from] RepositoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Scan(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::error!("{}", self);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
