use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// Custom error type for API endpoints
///
/// A missing record is not an error (reads answer `none`), so the only
/// failures left are the backend's.
#[derive(Debug)]
pub enum ApiError {
    /// Storage Adapter operation error
    StorageError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::StorageError(err) => {
                tracing::error!("Storage error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Storage error: {}", err),
                )
            }
        };

        (status, [(header::CONTENT_TYPE, "text/plain")], error_message).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::StorageError(err)
    }
}
