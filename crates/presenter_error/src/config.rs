//! Configuration error types.

/// Configuration could not be loaded, or a setting holds an unusable value.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Dotted path of the offending setting, when a single one is to blame
    pub setting: Option<String>,
    /// What went wrong
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// A failure loading or parsing configuration as a whole.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self::located(None, message.into())
    }

    /// A setting that parsed but cannot be run with.
    ///
    /// ```
    /// use presenter_error::ConfigError;
    ///
    /// let err = ConfigError::invalid("video.narration_workers", "must be at least 1");
    /// assert_eq!(err.setting.as_deref(), Some("video.narration_workers"));
    /// assert_eq!(err.message, "video.narration_workers must be at least 1");
    /// ```
    #[track_caller]
    pub fn invalid(setting: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        let setting = setting.into();
        let message = format!("{} {}", setting, reason);
        Self::located(Some(setting), message)
    }

    #[track_caller]
    fn located(setting: Option<String>, message: String) -> Self {
        let location = std::panic::Location::caller();
        Self {
            setting,
            message,
            line: location.line(),
            file: location.file(),
        }
    }
}
