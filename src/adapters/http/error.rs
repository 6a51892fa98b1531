//! Error-to-response mapping for the HTTP layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::domain::feedback::StorageError;

use super::dto::ErrorResponse;

/// Storage failure surfacing at the HTTP boundary.
///
/// Every storage failure, on the write path and on the read paths alike, is
/// reported to the client as a generic 500 envelope. The underlying cause is
/// logged server-side only.
#[derive(Debug)]
pub struct ApiError(StorageError);

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
