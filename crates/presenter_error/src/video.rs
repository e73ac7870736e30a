//! Video assembly error types.

/// Specific error conditions when rendering clips or the final video.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum VideoErrorKind {
    /// Nothing to concatenate
    #[display("No clips to assemble")]
    NoClips,
    /// Encoder binary could not be launched
    #[display("Failed to spawn {}: {}", program, message)]
    Spawn {
        /// Program name
        program: String,
        /// OS error message
        message: String,
    },
    /// Encoder exited unsuccessfully
    #[display("{} exited with status {}: {}", program, status, stderr)]
    CommandFailed {
        /// Program name
        program: String,
        /// Exit status description
        status: String,
        /// Captured stderr
        stderr: String,
    },
    /// Duration probe printed something unparseable
    #[display("Could not read clip duration: {}", _0)]
    Probe(String),
}

/// Video error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Video Error: {} at line {} in {}", kind, line, file)]
pub struct VideoError {
    /// The specific error condition
    pub kind: VideoErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl VideoError {
    /// Create a new VideoError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: VideoErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
