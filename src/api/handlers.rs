use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::ApiError;
use crate::AppState;

use super::models::{ErrorResponse, GenerateRequest, GenerateResponse, Prompt};

pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(payload) = payload?;

    // Forwarded verbatim; no trimming or length checks.
    let prompt = match payload.prompt() {
        Prompt::Text(prompt) => prompt,
        Prompt::Missing => return Err(ApiError::MissingPrompt),
        Prompt::NotText => {
            return Err(ApiError::InvalidBody(
                "prompt must be a string".to_string(),
            ))
        }
    };

    let text = state.generator.generate(&prompt).await?;

    Ok(Json(GenerateResponse::success(text)))
}

pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}
