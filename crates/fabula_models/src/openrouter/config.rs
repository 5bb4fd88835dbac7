//! Configuration for the OpenRouter connection.

use fabula_error::ConfigError;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "google/gemini-2.0-flash-001";

/// Default referer header sent with each request.
pub const DEFAULT_REFERER: &str = "http://localhost:8000";

/// Configuration for the OpenRouter connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OpenRouterConfig {
    /// Base URL of the API (e.g., "https://openrouter.ai/api/v1")
    pub base_url: String,
    /// Bearer token for the Authorization header
    pub api_key: String,
    /// Model identifier to use for generation
    pub model: String,
    /// Value of the HTTP-Referer header
    pub referer: String,
}

impl OpenRouterConfig {
    /// Create a new configuration with default base URL, model, and referer.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            referer: DEFAULT_REFERER.to_string(),
        }
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `OPENROUTER_API_KEY` (required)
    /// - `OPENROUTER_BASE_URL` (default: "https://openrouter.ai/api/v1")
    /// - `OPENROUTER_MODEL` (default: "google/gemini-2.0-flash-001")
    /// - `OPENROUTER_REFERER` (default: "http://localhost:8000")
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENROUTER_API_KEY")
            .map_err(|_| ConfigError::new("OPENROUTER_API_KEY not set"))?;
        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var("OPENROUTER_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(model) = std::env::var("OPENROUTER_MODEL") {
            config.model = model;
        }
        if let Ok(referer) = std::env::var("OPENROUTER_REFERER") {
            config.referer = referer;
        }
        Ok(config)
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
