//! Tests for upstream response classification.

use fabula_core::{GenerateRequest, Message};
use fabula_error::GenerationErrorKind;
use fabula_models::{interpret_response, ChatCompletionRequest};

#[test]
fn success_body_yields_content() {
    let body = r#"{"choices":[{"message":{"role":"assistant","content":"Once upon a time..."}}]}"#;
    let result = interpret_response(200, body).expect("success body");
    assert_eq!(result, "Once upon a time...");
}

#[test]
fn rate_limit_envelope_maps_to_rate_limited() {
    let body = r#"{"error":{"message":"Rate limit exceeded: free tier","code":429}}"#;
    let err = interpret_response(200, body).unwrap_err();
    assert!(matches!(
        err.kind,
        GenerationErrorKind::RateLimited(ref message) if message.contains("Rate limit exceeded")
    ));
}

#[test]
fn http_429_maps_to_rate_limited() {
    let body = r#"{"error":{"message":"slow down"}}"#;
    let err = interpret_response(429, body).unwrap_err();
    assert!(matches!(err.kind, GenerationErrorKind::RateLimited(_)));
}

#[test]
fn plain_error_envelope_maps_to_api_error() {
    let body = r#"{"error":{"message":"model overloaded","code":502}}"#;
    let err = interpret_response(200, body).unwrap_err();
    match err.kind {
        GenerationErrorKind::Api { message, .. } => assert_eq!(message, "model overloaded"),
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[test]
fn envelope_without_message_uses_fallback() {
    let body = r#"{"error":{}}"#;
    let err = interpret_response(500, body).unwrap_err();
    match err.kind {
        GenerationErrorKind::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "API Error");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[test]
fn missing_choices_is_malformed() {
    let err = interpret_response(200, r#"{"choices":[]}"#).unwrap_err();
    assert!(matches!(err.kind, GenerationErrorKind::Malformed(_)));

    let err = interpret_response(200, r#"{"choices":[{"message":{"role":"assistant"}}]}"#)
        .unwrap_err();
    assert!(matches!(err.kind, GenerationErrorKind::Malformed(_)));
}

#[test]
fn unparseable_success_body_is_malformed() {
    let err = interpret_response(200, "<html>bad gateway</html>").unwrap_err();
    assert!(matches!(err.kind, GenerationErrorKind::Malformed(_)));
}

#[test]
fn non_2xx_without_envelope_is_api_error() {
    let err = interpret_response(502, "Bad Gateway").unwrap_err();
    assert!(matches!(
        err.kind,
        GenerationErrorKind::Api { status: 502, .. }
    ));
}

#[test]
fn request_conversion_uses_configured_model() {
    let request = GenerateRequest {
        messages: vec![Message::user("tell me a story")],
        max_tokens: Some(600),
        temperature: Some(0.7),
        model: None,
    };

    let wire = ChatCompletionRequest::from_generate(&request, "google/gemini-2.0-flash-001");

    assert_eq!(wire.model, "google/gemini-2.0-flash-001");
    assert_eq!(wire.messages.len(), 1);
    assert_eq!(wire.messages[0].role, "user");
    assert_eq!(wire.messages[0].content, "tell me a story");
    assert_eq!(wire.max_tokens, Some(600));

    let serialized = serde_json::to_value(&wire).expect("serializable request");
    assert_eq!(serialized["messages"][0]["role"], "user");
    assert_eq!(serialized["max_tokens"], 600);
    assert!(serialized.get("stream").is_none());
}
