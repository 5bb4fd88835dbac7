//! Wire types for the OpenAI-compatible chat-completion API.

use fabula_core::GenerateRequest;
use serde::{Deserialize, Serialize};

/// Chat completion request body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Temperature for sampling (0.0 - 2.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ChatCompletionRequest {
    /// Convert a generic generation request into the wire shape.
    ///
    /// The request's model override wins over `default_model` when present.
    pub fn from_generate(req: &GenerateRequest, default_model: &str) -> Self {
        Self {
            model: req
                .model
                .clone()
                .unwrap_or_else(|| default_model.to_string()),
            messages: req
                .messages
                .iter()
                .map(|message| ChatMessage::new(message.role.as_str(), message.content.clone()))
                .collect(),
            max_tokens: req.max_tokens,
            temperature: req.temperature,
        }
    }
}

/// A message in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a new message.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }
}

/// Chat completion response body.
///
/// Every field is optional: the same shape covers success bodies, error
/// envelopes, and the degenerate responses classification must reject.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ChatCompletionResponse {
    /// Generated completions
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Structured error envelope, present on failures
    #[serde(default)]
    pub error: Option<ErrorEnvelope>,
}

/// A completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The generated message
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

/// Message in a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    /// Role of the message (typically "assistant")
    #[serde(default)]
    pub role: Option<String>,
    /// Generated content
    #[serde(default)]
    pub content: Option<String>,
}

/// Structured error envelope returned by the upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    /// Human-readable error message
    #[serde(default)]
    pub message: Option<String>,
    /// Upstream error code, 429 for rate limits
    #[serde(default)]
    pub code: Option<i64>,
}
