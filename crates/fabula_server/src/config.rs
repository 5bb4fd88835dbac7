//! Process configuration.

use fabula_error::ConfigError;
use fabula_models::OpenRouterConfig;

const DEFAULT_PORT: u16 = 3000;

/// Configuration for the server process, resolved once at boot.
///
/// Missing required values abort startup before the listener binds.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the listener binds on
    pub port: u16,
    /// Origins allowed by the CORS layer
    pub allowed_origins: Vec<String>,
    /// PostgreSQL connection string
    pub database_url: String,
    /// Upstream generation API settings
    pub openrouter: OpenRouterConfig,
}

impl AppConfig {
    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `PORT` (default: 3000)
    /// - `ALLOWED_ORIGINS` (comma-separated, default: "http://localhost:8000")
    /// - `DATABASE_URL` (required)
    /// - the `OPENROUTER_*` variables consumed by
    ///   [`OpenRouterConfig::from_env`]
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::new(format!("PORT is not a number: {}", value)))?,
            Err(_) => DEFAULT_PORT,
        };

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| vec!["http://localhost:8000".to_string()]);

        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::new("DATABASE_URL not set"))?;

        let openrouter = OpenRouterConfig::from_env()?;

        Ok(Self {
            port,
            allowed_origins,
            database_url,
            openrouter,
        })
    }
}
