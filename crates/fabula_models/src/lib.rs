//! Upstream chat-completion client for the Fabula story generation service.
//!
//! One provider binding: OpenRouter's OpenAI-compatible chat-completion API.
//! The client makes a single awaited POST per request and classifies the
//! response into the generation error taxonomy; there is no retry, backoff,
//! or streaming.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openrouter;

pub use openrouter::{
    interpret_response, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice,
    ChoiceMessage, ErrorEnvelope, OpenRouterClient, OpenRouterConfig,
};
