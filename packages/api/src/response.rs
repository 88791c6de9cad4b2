// ABOUTME: API error type and its HTTP response mapping
// ABOUTME: Malformed input is 400, absence is 404, persistence failure is 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use todoapp_storage::StorageError;

/// Every way a todo request can fail. Bodies are plain text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid ID")]
    InvalidId,

    #[error("{0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("Todo not found")]
    NotFound,

    #[error("{0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {self}");
        }
        (status, self.to_string()).into_response()
    }
}
