use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Body parsing error: {0}")]
    BodyParsing(String),

    #[error("Cluster read error: {0}")]
    ClusterRead(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Completion error: {0}")]
    Completion(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
}

/// Helper for mapping any unknown error into internal error
pub fn internal_error<E: ToString>(err: E) -> AppError {
    AppError::InternalServerError(err.to_string())
}

/// Maps a kube client failure onto the cluster error kinds.
/// An API status of 404 means the namespace or pod does not exist.
pub fn cluster_error(err: kube::Error) -> AppError {
    match err {
        kube::Error::Api(status) if status.code == 404 => AppError::NotFound(status.message.to_string()),
        other => AppError::ClusterRead(other.to_string()),
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::BodyParsing(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Choose status codes per variant
        let status = match self {
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BodyParsing(_) => StatusCode::BAD_REQUEST,
            AppError::ClusterRead(_) => StatusCode::BAD_GATEWAY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Completion(_) => StatusCode::BAD_GATEWAY,
            AppError::InvalidSelection(_) => StatusCode::CONFLICT,
        };

        // String provided by thiserror → safe JSON message
        let body = Json(json!({
            "message": self.to_string()
        }));

        (status, body).into_response()
    }
}
