//! JSON error types.

/// A document that should have been JSON, with what it was and why it failed.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error in {}: {} at line {} in {}", document, message, line, file)]
pub struct JsonError {
    /// What was being read or written, such as `structure snapshot`
    pub document: String,
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// JSON failure while handling `document`.
    ///
    /// ```
    /// use presenter_error::JsonError;
    ///
    /// let err = JsonError::new("structure snapshot", "missing field `slides`");
    /// assert!(err.to_string().starts_with("JSON Error in structure snapshot: missing field"));
    /// ```
    #[track_caller]
    pub fn new(document: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            document: document.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
