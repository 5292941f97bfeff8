mod handlers;
mod models;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

#[allow(unused_imports)]
pub use handlers::{generate, health, not_found};
#[allow(unused_imports)]
pub use models::{ErrorResponse, GenerateRequest, GenerateResponse, Prompt};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate", post(generate))
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(state)
}
