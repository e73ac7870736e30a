//! LLM provider error types.

/// Specific error conditions when talking to an LLM or speech provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum LlmErrorKind {
    /// Request never reached the provider or the connection dropped
    #[display("Transport failure: {}", _0)]
    Transport(String),
    /// Provider rejected the request with HTTP 429
    #[display("Rate limit exceeded")]
    RateLimited,
    /// Provider returned a 5xx status
    #[display("Server error {}: {}", status, message)]
    Server {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },
    /// Provider returned a non-retryable 4xx status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },
    /// Response body did not have the expected shape
    #[display("Failed to parse response: {}", _0)]
    ResponseParsing(String),
    /// API key environment variable is missing
    #[display("Missing credentials: {}", _0)]
    MissingCredentials(String),
}

impl LlmErrorKind {
    /// Whether a retry of the same request could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            LlmErrorKind::Transport(_) | LlmErrorKind::RateLimited | LlmErrorKind::Server { .. }
        )
    }
}

/// LLM error with location tracking.
///
/// # Examples
///
/// ```
/// use presenter_error::{LlmError, LlmErrorKind};
///
/// let err = LlmError::new(LlmErrorKind::RateLimited);
/// assert!(err.kind.is_transient());
///
/// let err = LlmError::new(LlmErrorKind::MissingCredentials("OPENAI_API_KEY".into()));
/// assert!(!err.kind.is_transient());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("LLM Error: {} at line {} in {}", kind, line, file)]
pub struct LlmError {
    /// The specific error condition
    pub kind: LlmErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl LlmError {
    /// Create a new LlmError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: LlmErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
