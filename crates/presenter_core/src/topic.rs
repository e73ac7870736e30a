//! The presentation topic.

use presenter_error::{PipelineError, PipelineErrorKind, PresenterResult};
use serde::{Deserialize, Serialize};

/// What the presentation is about.
///
/// Opaque, non-empty, and never changed once a run starts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(transparent)]
pub struct Topic(String);

impl Topic {
    /// Create a topic, rejecting blank input.
    ///
    /// # Examples
    ///
    /// ```
    /// use presenter_core::Topic;
    ///
    /// assert!(Topic::new("Rust ownership").is_ok());
    /// assert!(Topic::new("   ").is_err());
    /// ```
    pub fn new(topic: impl Into<String>) -> PresenterResult<Self> {
        let topic = topic.into();
        if topic.trim().is_empty() {
            return Err(PipelineError::new(PipelineErrorKind::EmptyTopic).into());
        }
        Ok(Self(topic))
    }

    /// The raw topic text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Directory name for this topic's artifacts: spaces and path separators
    /// become underscores, everything is lowercased. A name made only of dots
    /// has its dots replaced too, so it always names a child directory.
    ///
    /// ```
    /// use presenter_core::Topic;
    ///
    /// let topic = Topic::new("Async Rust in Practice").unwrap();
    /// assert_eq!(topic.folder_name(), "async_rust_in_practice");
    /// assert_eq!(Topic::new("..").unwrap().folder_name(), "__");
    /// ```
    pub fn folder_name(&self) -> String {
        let name = self
            .0
            .trim()
            .replace([' ', '/', '\\'], "_")
            .to_lowercase();

        if name.chars().all(|c| c == '.') {
            "_".repeat(name.len())
        } else {
            name
        }
    }
}
