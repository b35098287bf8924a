//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hearth_domain::error::{HearthError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

/// Maps [`HearthError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(HearthError);

impl From<HearthError> for ApiError {
    fn from(err: HearthError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl ApiError {
    /// Status code this error is reported with.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            HearthError::NotFound(_) => StatusCode::NOT_FOUND,
            HearthError::InvalidParent(_) | HearthError::InvalidType(_) => StatusCode::BAD_REQUEST,
            HearthError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, error = %self.0, "request rejected");
        (
            status,
            Json(ErrorBody {
                detail: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
