//! Trait definitions for generation backends and persistence sinks.

use async_trait::async_trait;
use fabula_core::{GenerateRequest, GenerateResponse, StoryRecord};
use fabula_error::FabulaResult;

/// Core trait that all generation backends must implement.
///
/// One awaited call per request, no retries. Errors carry enough
/// classification for the HTTP layer to choose a status code.
#[async_trait]
pub trait StoryDriver: Send + Sync {
    /// Generate model output for a request.
    async fn generate(&self, req: &GenerateRequest) -> FabulaResult<GenerateResponse>;

    /// Provider name (e.g., "openrouter").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "google/gemini-2.0-flash-001").
    fn model_name(&self) -> &str;
}

/// Persistence sink for generated stories.
///
/// Callers treat the result as advisory: the error variant is logged and
/// discarded, never surfaced to the HTTP caller.
#[async_trait]
pub trait StoryRepository: Send + Sync {
    /// Insert one story record. Duplicate submissions create duplicate rows.
    async fn insert_story(&self, record: &StoryRecord) -> FabulaResult<()>;
}
