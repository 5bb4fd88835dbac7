//! Error types for the Fabula story generation service.
//!
//! This crate provides the foundation error types used throughout the Fabula
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use fabula_error::{ConfigError, FabulaResult};
//!
//! fn load_key() -> FabulaResult<String> {
//!     Err(ConfigError::new("OPENROUTER_API_KEY not set"))?
//! }
//!
//! match load_key() {
//!     Ok(key) => println!("Got: {}", key),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
#[cfg(feature = "database")]
mod database;
mod error;
mod generation;
mod server;
mod validation;

pub use config::ConfigError;
#[cfg(feature = "database")]
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{FabulaError, FabulaErrorKind, FabulaResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use server::{ServerError, ServerErrorKind};
pub use validation::ValidationError;
