use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::ErrorResponse;
use crate::gemini::GenerationError;

/// Everything a handler can fail with; each variant maps to one status code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No prompt provided")]
    MissingPrompt,

    #[error("{0}")]
    InvalidBody(String),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingPrompt | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Generation(err) => {
                tracing::warn!(error = %err, "Generation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
