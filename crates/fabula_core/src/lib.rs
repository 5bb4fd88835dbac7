//! Core data types for the Fabula story generation service.
//!
//! This crate provides the foundation data types used across the Fabula
//! workspace: the story request record, its validation, the prompt builder,
//! and the generic generation request/response types.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod input;
mod message;
mod prompt;
mod request;
mod role;
mod story;
mod telemetry;

pub use input::RawStoryInput;
pub use message::Message;
pub use prompt::build_prompt;
pub use request::{GenerateRequest, GenerateResponse};
pub use role::Role;
pub use story::{StoryRecord, StoryRequest};
pub use telemetry::init_tracing;
