//! Top-level error wrapper types.

use crate::{ConfigError, JsonError, LlmError, PipelineError, StorageError, VideoError};

/// Every error condition a Presenter operation can surface.
///
/// # Examples
///
/// ```
/// use presenter_error::{PresenterError, PipelineError, PipelineErrorKind};
///
/// let err: PresenterError = PipelineError::new(PipelineErrorKind::EmptyTopic).into();
/// assert!(format!("{}", err).contains("Topic cannot be empty"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PresenterErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// LLM or speech provider error
    #[from(LlmError)]
    Llm(LlmError),
    /// Workflow engine error
    #[from(PipelineError)]
    Pipeline(PipelineError),
    /// Video assembly error
    #[from(VideoError)]
    Video(VideoError),
}

/// Presenter error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Presenter Error: {}", _0)]
pub struct PresenterError(Box<PresenterErrorKind>);

impl PresenterError {
    /// Create a new error from a kind.
    pub fn new(kind: PresenterErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PresenterErrorKind {
        &self.0
    }

    /// Whether the failed operation may succeed if attempted again.
    ///
    /// Only provider transport, rate limit and server errors qualify.
    ///
    /// ```
    /// use presenter_error::{LlmError, LlmErrorKind, PresenterError};
    ///
    /// let err: PresenterError = LlmError::new(LlmErrorKind::RateLimited).into();
    /// assert!(err.is_transient());
    /// ```
    pub fn is_transient(&self) -> bool {
        match self.kind() {
            PresenterErrorKind::Llm(e) => e.kind.is_transient(),
            _ => false,
        }
    }
}

// Generic From implementation for any type that converts to PresenterErrorKind
impl<T> From<T> for PresenterError
where
    T: Into<PresenterErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Presenter operations.
pub type PresenterResult<T> = std::result::Result<T, PresenterError>;
