//! Error types for the upstream generation client.

/// Error kinds for upstream chat-completion calls.
///
/// Each variant corresponds to one branch of the response classification:
/// the transport layer failed, the upstream returned a structured error
/// envelope (rate-limited or otherwise), or the body parsed but lacked the
/// expected `choices[0].message.content` shape.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Network-level failure before a response body was obtained
    #[display("Transport error: {}", _0)]
    Transport(String),

    /// Upstream returned an error status or error envelope
    #[display("Upstream API error (status {}): {}", status, message)]
    Api {
        /// HTTP status returned by the upstream
        status: u16,
        /// Best-available upstream message
        message: String,
    },

    /// Upstream signalled an explicit rate limit
    #[display("Upstream rate limited: {}", _0)]
    RateLimited(String),

    /// Response body did not match the chat-completion contract
    #[display("Malformed upstream response: {}", _0)]
    Malformed(String),
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use fabula_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::RateLimited(
///     "Rate limit exceeded".to_string(),
/// ));
/// assert!(format!("{}", err).contains("rate limited"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
