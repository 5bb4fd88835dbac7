//! Integration tests for the story generation endpoint.
//!
//! The router runs against in-memory collaborators so every pipeline
//! outcome is exercised without a network or a database.

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use fabula_core::{GenerateRequest, GenerateResponse, StoryRecord};
use fabula_error::{
    DatabaseError, DatabaseErrorKind, FabulaResult, GenerationError, GenerationErrorKind,
};
use fabula_interface::{StoryDriver, StoryRepository};
use fabula_server::{router, AppState};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Driver that returns a fixed story and records the request it received.
struct FixedDriver {
    story: String,
    called: AtomicBool,
    seen: Mutex<Option<GenerateRequest>>,
}

impl FixedDriver {
    fn new(story: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            story: story.into(),
            called: AtomicBool::new(false),
            seen: Mutex::new(None),
        })
    }
}

#[async_trait]
impl StoryDriver for FixedDriver {
    async fn generate(&self, req: &GenerateRequest) -> FabulaResult<GenerateResponse> {
        self.called.store(true, Ordering::SeqCst);
        *self.seen.lock().unwrap() = Some(req.clone());
        Ok(GenerateResponse {
            text: self.story.clone(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "fixed"
    }

    fn model_name(&self) -> &str {
        "test-model"
    }
}

/// Driver that fails every call with the given classification.
struct FailingDriver {
    kind: GenerationErrorKind,
}

#[async_trait]
impl StoryDriver for FailingDriver {
    async fn generate(&self, _req: &GenerateRequest) -> FabulaResult<GenerateResponse> {
        Err(GenerationError::new(self.kind.clone()).into())
    }

    fn provider_name(&self) -> &'static str {
        "failing"
    }

    fn model_name(&self) -> &str {
        "test-model"
    }
}

/// Repository that records inserted rows.
#[derive(Default)]
struct RecordingRepository {
    rows: Mutex<Vec<StoryRecord>>,
}

#[async_trait]
impl StoryRepository for RecordingRepository {
    async fn insert_story(&self, record: &StoryRecord) -> FabulaResult<()> {
        self.rows.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// Repository whose every insert fails like a refused connection.
struct FailingRepository;

#[async_trait]
impl StoryRepository for FailingRepository {
    async fn insert_story(&self, _record: &StoryRecord) -> FabulaResult<()> {
        Err(DatabaseError::new(DatabaseErrorKind::Connection(
            "connection refused".to_string(),
        ))
        .into())
    }
}

fn valid_body() -> Value {
    json!({
        "academic_grade": "5th grade",
        "subject": "photosynthesis",
        "word_count": 300,
        "language": "English"
    })
}

fn post_generate(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate-story")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn missing_required_fields_return_400_without_upstream_call() {
    for field in ["academic_grade", "subject", "word_count", "language"] {
        let driver = FixedDriver::new("unused");
        let repository = Arc::new(RecordingRepository::default());
        let app = router(AppState::new(driver.clone(), repository.clone()));

        let mut body = valid_body();
        body.as_object_mut().unwrap().remove(field);

        let response = app.oneshot(post_generate(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["error"], "Invalid or missing required inputs");
        assert!(!driver.called.load(Ordering::SeqCst));
        assert!(repository.rows.lock().unwrap().is_empty());
    }
}

#[tokio::test]
async fn string_word_count_returns_400() {
    let driver = FixedDriver::new("unused");
    let app = router(AppState::new(
        driver.clone(),
        Arc::new(RecordingRepository::default()),
    ));

    let mut body = valid_body();
    body["word_count"] = json!("300");

    let response = app.oneshot(post_generate(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!driver.called.load(Ordering::SeqCst));
}

#[tokio::test]
async fn successful_generation_returns_story_and_persists() {
    let driver = FixedDriver::new("Once upon a time...");
    let repository = Arc::new(RecordingRepository::default());
    let app = router(AppState::new(driver.clone(), repository.clone()));

    let response = app.oneshot(post_generate(&valid_body())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["story"], "Once upon a time...");

    let rows = repository.rows.lock().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].subject, "photosynthesis");
    assert_eq!(rows[0].word_count, 300);
    assert_eq!(rows[0].story_text, "Once upon a time...");
}

#[tokio::test]
async fn prompt_reaches_upstream_with_doubled_token_budget() {
    let driver = FixedDriver::new("Once upon a time...");
    let app = router(AppState::new(
        driver.clone(),
        Arc::new(RecordingRepository::default()),
    ));

    let response = app.oneshot(post_generate(&valid_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let seen = driver.seen.lock().unwrap();
    let request = seen.as_ref().expect("driver called");
    assert_eq!(request.max_tokens, Some(600));
    assert_eq!(request.temperature, Some(0.7));
    assert_eq!(request.messages.len(), 1);
    assert!(request.messages[0]
        .content
        .starts_with("Create a didactic story for 5th grade students about photosynthesis"));
    assert!(request.messages[0]
        .content
        .contains("approximately 300 words, in English"));
}

#[tokio::test]
async fn rate_limited_upstream_returns_429() {
    let driver = Arc::new(FailingDriver {
        kind: GenerationErrorKind::RateLimited("Rate limit exceeded".to_string()),
    });
    let app = router(AppState::new(
        driver,
        Arc::new(RecordingRepository::default()),
    ));

    let response = app.oneshot(post_generate(&valid_body())).await.unwrap();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let json = response_json(response).await;
    assert_eq!(json["error"], "Rate limit exceeded");
}

#[tokio::test]
async fn upstream_error_envelope_returns_500_with_message() {
    let driver = Arc::new(FailingDriver {
        kind: GenerationErrorKind::Api {
            status: 502,
            message: "model overloaded".to_string(),
        },
    });
    let app = router(AppState::new(
        driver,
        Arc::new(RecordingRepository::default()),
    ));

    let response = app.oneshot(post_generate(&valid_body())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = response_json(response).await;
    assert_eq!(json["error"], "model overloaded");
}

#[tokio::test]
async fn malformed_upstream_response_returns_generic_500() {
    let driver = Arc::new(FailingDriver {
        kind: GenerationErrorKind::Malformed(
            "response missing choices[0].message.content".to_string(),
        ),
    });
    let app = router(AppState::new(
        driver,
        Arc::new(RecordingRepository::default()),
    ));

    let response = app.oneshot(post_generate(&valid_body())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = response_json(response).await;
    assert_eq!(json["error"], "Failed to generate story");
}

#[tokio::test]
async fn persistence_failure_does_not_change_the_response() {
    let driver = FixedDriver::new("Once upon a time...");
    let app = router(AppState::new(driver.clone(), Arc::new(FailingRepository)));

    let response = app.oneshot(post_generate(&valid_body())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["story"], "Once upon a time...");
}

#[tokio::test]
async fn health_check_returns_ok() {
    let app = router(AppState::new(
        FixedDriver::new("unused"),
        Arc::new(RecordingRepository::default()),
    ));

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["status"], "ok");
}
