//! HTTP surface for the Fabula story generation service.
//!
//! One endpoint, one pipeline: `POST /generate-story` validates the body,
//! builds a prompt, makes a single upstream generation call, best-effort
//! persists the result, and emits the story or a classified error. The
//! router is exported so integration tests can drive it with in-memory
//! collaborators.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod cors;
mod response;
mod routes;
mod state;

pub use config::AppConfig;
pub use cors::cors_layer;
pub use response::{ApiError, ErrorBody, StoryBody};
pub use routes::router;
pub use state::AppState;
