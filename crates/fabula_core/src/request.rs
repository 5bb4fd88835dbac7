//! Request and response types for LLM generation.

use crate::Message;
use serde::{Deserialize, Serialize};

/// Generic generation request.
///
/// # Examples
///
/// ```
/// use fabula_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest {
///     messages: vec![Message::user("Hello!")],
///     max_tokens: Some(100),
///     temperature: Some(0.7),
///     model: None,
/// };
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.max_tokens, Some(100));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: Option<f32>,
    /// Model identifier, falling back to the client's configured model
    pub model: Option<String>,
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use fabula_core::GenerateResponse;
///
/// let response = GenerateResponse {
///     text: "Once upon a time...".to_string(),
/// };
///
/// assert!(response.text.starts_with("Once"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated text from the model
    pub text: String,
}
