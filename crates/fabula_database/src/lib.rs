//! PostgreSQL persistence for the Fabula story generation service.
//!
//! One table, one write path: generated stories are inserted fire-and-forget
//! into `stories`. The caller logs and discards insertion errors; nothing in
//! this crate ever reaches the HTTP response.

mod connection;
pub mod schema;
mod story_repository;

pub use connection::{check_connection, establish_pool, PgPool};
pub use story_repository::DatabaseStoryRepository;

/// Result type for database operations.
pub type DatabaseResult<T> = std::result::Result<T, fabula_error::DatabaseError>;
