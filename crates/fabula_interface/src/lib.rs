//! Trait definitions for the Fabula story generation service.
//!
//! This crate provides the seams between the request pipeline and its two
//! external collaborators: the upstream text-generation API and the
//! persistence sink. Production implementations live in `fabula_models` and
//! `fabula_database`; tests substitute in-memory doubles.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{StoryDriver, StoryRepository};
