use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::features::registrations::validator::ValidationError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("No CV file was attached")]
    MissingUpload,

    #[error("Failed to write upload: {0}")]
    UploadWrite(String),

    #[error("Failed to persist submission: {0}")]
    Persistence(String),

    #[error("Failed to send notification: {0}")]
    Notification(String),

    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::MissingUpload | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::UploadWrite(_)
            | AppError::Persistence(_)
            | AppError::Notification(_)
            | AppError::Connection(_)
            | AppError::Query(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Plain-text body sent to the client. Infrastructure details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            AppError::MissingUpload => "Failed to upload CV".to_string(),
            AppError::UploadWrite(_) => "Failed to save CV".to_string(),
            AppError::Persistence(_) => "Failed to save form data".to_string(),
            AppError::Notification(_) => "Failed to send email".to_string(),
            AppError::Connection(_) | AppError::Query(_) => "Failed to fetch users".to_string(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }

        (status, self.public_message()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
