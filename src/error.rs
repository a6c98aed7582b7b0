use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Title not found: {0}")]
    NotFound(String),

    #[error("Query index {index} out of range for catalog of {len} items")]
    InvalidIndex { index: usize, len: usize },

    #[error("Catalog is empty")]
    EmptyCatalog,

    #[error("Corrupt artifact: {0}")]
    CorruptArtifact(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed artifact: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            // Out-of-range indices and an empty catalog indicate internal
            // misuse or a broken deployment, not a bad request.
            AppError::InvalidIndex { .. } | AppError::EmptyCatalog => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::CorruptArtifact(_) | AppError::Io(_) | AppError::Json(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
