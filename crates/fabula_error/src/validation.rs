//! Input validation error types.

/// Validation error with source location tracking.
///
/// Signals a request body that fails the required-field or numeric-type
/// checks. Always the caller's fault, always mapped to HTTP 400.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", message, line, file)]
pub struct ValidationError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use fabula_error::ValidationError;
    ///
    /// let err = ValidationError::new("Invalid or missing required inputs");
    /// assert!(err.message.contains("required inputs"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
