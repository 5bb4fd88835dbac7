//! Shared request handler state.

use fabula_interface::{StoryDriver, StoryRepository};
use std::sync::Arc;

/// Handles to the two external collaborators, constructed once at boot and
/// shared read-only across request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Upstream generation client
    pub driver: Arc<dyn StoryDriver>,
    /// Persistence sink for generated stories
    pub stories: Arc<dyn StoryRepository>,
}

impl AppState {
    /// Creates new handler state.
    pub fn new(driver: Arc<dyn StoryDriver>, stories: Arc<dyn StoryRepository>) -> Self {
        Self { driver, stories }
    }
}
