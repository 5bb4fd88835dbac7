//! Router and request handlers.

use crate::response::{ApiError, StoryBody};
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post};
use axum::Router;
use fabula_core::{build_prompt, GenerateRequest, Message, RawStoryInput};
use serde_json::json;
use tracing::{debug, error, instrument};

/// Creates the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate-story", post(generate_story))
        .route("/health", get(health_check))
        .fallback(fallback)
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// The story generation pipeline: validate, build prompt, generate,
/// best-effort persist, respond.
#[instrument(skip_all)]
async fn generate_story(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<StoryBody>), ApiError> {
    // A word_count sent as a string fails deserialization here and maps to
    // the same 400 as a missing field.
    let input: RawStoryInput = match serde_json::from_value(payload) {
        Ok(input) => input,
        Err(_) => return Err(ApiError::invalid_input()),
    };
    let request = match input.into_request() {
        Some(request) => request,
        None => return Err(ApiError::invalid_input()),
    };

    let prompt = build_prompt(&request);
    debug!(prompt_length = prompt.len(), "Built story prompt");

    let generate = GenerateRequest {
        messages: vec![Message::user(prompt)],
        max_tokens: request.max_tokens(),
        temperature: Some(0.7),
        model: None,
    };
    let response = state.driver.generate(&generate).await?;

    let record = request.with_story(response.text);
    // Persistence outcome never gates or alters the response.
    if let Err(error) = state.stories.insert_story(&record).await {
        error!(%error, "Failed to store story");
    }

    Ok((
        StatusCode::OK,
        Json(StoryBody {
            story: record.story_text,
        }),
    ))
}
