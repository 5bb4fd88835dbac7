//! Top-level error wrapper types.

use crate::{ConfigError, GenerationError, ServerError, ValidationError};
#[cfg(feature = "database")]
use crate::DatabaseError;

/// This is the foundation error enum. Each crate in the workspace
/// contributes one variant.
///
/// # Examples
///
/// ```
/// use fabula_error::{ConfigError, FabulaError};
///
/// let config_err = ConfigError::new("PORT must be a number");
/// let err: FabulaError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FabulaErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Request validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Upstream generation error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Database error
    #[cfg(feature = "database")]
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// Server lifecycle error
    #[from(ServerError)]
    Server(ServerError),
}

/// Fabula error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fabula_error::{FabulaResult, ValidationError};
///
/// fn might_fail() -> FabulaResult<()> {
///     Err(ValidationError::new("Invalid or missing required inputs"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fabula Error: {}", _0)]
pub struct FabulaError(Box<FabulaErrorKind>);

impl FabulaError {
    /// Create a new error from a kind.
    pub fn new(kind: FabulaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FabulaErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to FabulaErrorKind
impl<T> From<T> for FabulaError
where
    T: Into<FabulaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Fabula operations.
///
/// # Examples
///
/// ```
/// use fabula_error::{FabulaResult, ConfigError};
///
/// fn fetch_config() -> FabulaResult<String> {
///     Err(ConfigError::new("OPENROUTER_API_KEY not set"))?
/// }
/// ```
pub type FabulaResult<T> = std::result::Result<T, FabulaError>;
