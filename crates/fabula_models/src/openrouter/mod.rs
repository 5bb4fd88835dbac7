//! OpenRouter chat-completion API binding.

mod classify;
mod client;
mod config;
mod dto;

pub use classify::interpret_response;
pub use client::OpenRouterClient;
pub use config::OpenRouterConfig;
pub use dto::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, ChoiceMessage,
    ErrorEnvelope,
};
