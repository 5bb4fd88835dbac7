//! HTTP response mapping for pipeline outcomes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use fabula_error::{FabulaError, FabulaErrorKind, GenerationErrorKind, ValidationError};
use serde::Serialize;

const INVALID_INPUT_MESSAGE: &str = "Invalid or missing required inputs";
const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate story";

/// Success body for a generated story.
#[derive(Debug, Clone, Serialize)]
pub struct StoryBody {
    /// The generated story text
    pub story: String,
}

/// Error body for every non-success outcome.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

/// Pipeline error carried to the response emitter.
///
/// Wraps the workspace error and renders the status/body table: validation
/// failures are 400, explicit upstream rate limits are 429, and everything
/// else is 500 with the best-available message.
#[derive(Debug)]
pub struct ApiError(FabulaError);

impl ApiError {
    /// The 400 response for bodies that fail validation or deserialization.
    pub fn invalid_input() -> Self {
        Self(ValidationError::new(INVALID_INPUT_MESSAGE).into())
    }

    fn status_and_message(&self) -> (StatusCode, String) {
        match self.0.kind() {
            FabulaErrorKind::Validation(err) => (StatusCode::BAD_REQUEST, err.message.clone()),
            FabulaErrorKind::Generation(err) => match &err.kind {
                GenerationErrorKind::RateLimited(message) => {
                    (StatusCode::TOO_MANY_REQUESTS, message.clone())
                }
                GenerationErrorKind::Api { message, .. } => {
                    (StatusCode::INTERNAL_SERVER_ERROR, message.clone())
                }
                GenerationErrorKind::Transport(message) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, message.clone())
                }
                GenerationErrorKind::Malformed(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_FAILURE_MESSAGE.to_string(),
                ),
            },
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_FAILURE_MESSAGE.to_string(),
            ),
        }
    }
}

impl From<FabulaError> for ApiError {
    fn from(err: FabulaError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_message();
        tracing::error!(%status, %error, source = %self.0, "request failed");
        (status, Json(ErrorBody { error })).into_response()
    }
}
