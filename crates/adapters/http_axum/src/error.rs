//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use stays_domain::error::{NotFoundError, StaysError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`StaysError`] to an HTTP response with appropriate status code.
///
/// `NotFound` deliberately carries no body — the legacy API answered 404
/// with nothing to say.
#[derive(Debug)]
pub struct ApiError(StaysError);

impl From<StaysError> for ApiError {
    fn from(err: StaysError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(StaysError::Validation(err))
    }
}

impl From<NotFoundError> for ApiError {
    fn from(err: NotFoundError) -> Self {
        Self(StaysError::NotFound(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            StaysError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            StaysError::NotFound(err) => {
                tracing::debug!(entity = err.entity, id = %err.id, "not found");
                StatusCode::NOT_FOUND.into_response()
            }
            StaysError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
