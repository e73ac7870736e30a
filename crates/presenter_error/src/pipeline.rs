//! Workflow engine error types.

/// Specific error conditions raised by the pipeline driver and its engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PipelineErrorKind {
    /// Topic is empty or whitespace
    #[display("Topic cannot be empty")]
    EmptyTopic,
    /// Structure stage produced no slides
    #[display("Presentation plan has no slides")]
    EmptyPlan,
    /// Reviewer rejected a plan without saying why
    #[display("Rejected review verdict requires feedback")]
    MissingFeedback,
    /// Completion event carries an index outside the batch
    #[display("Completion index {} out of range for batch of {}", index, expected)]
    IndexOutOfRange {
        /// Offending index
        index: usize,
        /// Batch size
        expected: usize,
    },
    /// Completion event arrived after the barrier already released
    #[display("Join barrier already completed")]
    BarrierCompleted,
    /// Batch finished without every index reporting
    #[display("Batch incomplete: {} of {} items completed", received, expected)]
    Incomplete {
        /// Completions received
        received: usize,
        /// Completions expected
        expected: usize,
    },
    /// Worker task panicked or was aborted
    #[display("Worker task failed: {}", _0)]
    TaskFailed(String),
    /// Concurrency limit of zero
    #[display("Worker pool needs at least one worker")]
    NoWorkers,
    /// Whole run exceeded its deadline
    #[display("Pipeline run timed out after {} seconds", _0)]
    Timeout(u64),
    /// LLM returned something the stage could not use
    #[display("Unusable response from {}: {}", stage, message)]
    InvalidResponse {
        /// Stage name
        stage: String,
        /// Problem description
        message: String,
    },
}

/// Error type for pipeline operations.
///
/// # Examples
///
/// ```
/// use presenter_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::EmptyPlan);
/// assert!(format!("{}", err).contains("no slides"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
