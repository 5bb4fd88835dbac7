//! Response classification for chat-completion calls.

use crate::openrouter::dto::ChatCompletionResponse;
use fabula_error::{GenerationError, GenerationErrorKind};

const FALLBACK_MESSAGE: &str = "API Error";

/// Classify an upstream response into generated text or a generation error.
///
/// Pure function over the HTTP status and raw body, so the classification
/// policy is testable without a network:
/// - an error envelope with an explicit rate-limit signal (HTTP 429 or
///   `error.code == 429`) becomes [`GenerationErrorKind::RateLimited`];
/// - any other envelope or non-2xx status becomes
///   [`GenerationErrorKind::Api`] with the best-available message;
/// - a body missing `choices[0].message.content` becomes
///   [`GenerationErrorKind::Malformed`];
/// - otherwise the content string is returned.
pub fn interpret_response(status: u16, body: &str) -> Result<String, GenerationError> {
    let success = (200..300).contains(&status);

    let parsed: ChatCompletionResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(e) => {
            if success {
                return Err(GenerationError::new(GenerationErrorKind::Malformed(
                    format!("Failed to parse response: {}", e),
                )));
            }
            return Err(GenerationError::new(GenerationErrorKind::Api {
                status,
                message: snippet(body),
            }));
        }
    };

    if let Some(envelope) = parsed.error {
        let message = envelope
            .message
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
        if status == 429 || envelope.code == Some(429) {
            return Err(GenerationError::new(GenerationErrorKind::RateLimited(
                message,
            )));
        }
        return Err(GenerationError::new(GenerationErrorKind::Api {
            status,
            message,
        }));
    }

    if !success {
        return Err(GenerationError::new(GenerationErrorKind::Api {
            status,
            message: snippet(body),
        }));
    }

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or_else(|| {
            GenerationError::new(GenerationErrorKind::Malformed(
                "response missing choices[0].message.content".to_string(),
            ))
        })
}

/// Bounded excerpt of an unstructured body for error messages.
fn snippet(body: &str) -> String {
    const LIMIT: usize = 200;
    if body.is_empty() {
        return "empty response body".to_string();
    }
    let mut end = body.len().min(LIMIT);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body[..end].to_string()
}
