use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::{ERR_MISSING_USER_ID, ERR_NOTHING_TO_DELETE, ERR_NOT_FOUND};

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("{}", ERR_NOT_FOUND)]
    NotFound,

    #[error("{}", ERR_MISSING_USER_ID)]
    MissingUserId,

    #[error("{}", ERR_NOTHING_TO_DELETE)]
    NothingToDelete,

    #[error("{0}")]
    InvalidInput(String),
}

impl AppError {
    /// HTTP status code this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Migration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MissingUserId | AppError::NothingToDelete | AppError::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::Database(e) => tracing::error!("Database error: {:?}", e),
            AppError::Migration(e) => tracing::error!("Migration error: {:?}", e),
            AppError::NotFound => tracing::info!("History record not found"),
            AppError::MissingUserId | AppError::NothingToDelete | AppError::InvalidInput(_) => {
                tracing::warn!("Rejected request: {}", self)
            }
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
