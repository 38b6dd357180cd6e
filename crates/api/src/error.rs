//! Unified error handling with Sentry capture.
//!
//! All route handlers return `Result<T, AppError>`. Every variant converts
//! to the JSON envelope `{"error": "<message>"}` with the matching status
//! code; server-fault errors are captured to Sentry before responding.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use studyspot_core::ParseAmenityError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// A requested preference is outside the fixed amenity set.
    #[error("invalid preference: {0}")]
    InvalidPreference(String),

    /// A required request field is missing or empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Database operation failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ParseAmenityError> for AppError {
    fn from(err: ParseAmenityError) -> Self {
        Self::InvalidPreference(err.0)
    }
}

/// JSON error envelope returned by every failed request.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Database(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::InvalidPreference(_) | Self::MissingField(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Query failures carry the driver detail through to the caller.
        (status, Json(ErrorBody {
            error: self.to_string(),
        }))
            .into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    async fn envelope(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_validation_errors_are_bad_request() {
        let (status, body) = envelope(AppError::InvalidPreference("sunny".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid preference: sunny");

        let (status, body) = envelope(AppError::MissingField("image")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "missing required field: image");
    }

    #[tokio::test]
    async fn test_not_found_envelope() {
        let (status, body) = envelope(AppError::NotFound("cafe 999999".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not found: cafe 999999");
    }

    #[tokio::test]
    async fn test_database_error_passes_detail_through() {
        let (status, body) = envelope(AppError::Database(sqlx::Error::RowNotFound)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["error"].as_str().unwrap();
        assert!(message.starts_with("database error: "));
    }
}
