//! Review outcome for a presentation plan.

use presenter_error::{PipelineError, PipelineErrorKind, PresenterResult};
use serde::{Deserialize, Serialize};

/// Whether the reviewer accepted a plan, and what to change if not.
///
/// A rejected verdict always carries non-empty feedback. Deserialization runs
/// the same check, and also accepts `is_perfect` as the flag name.
///
/// # Examples
///
/// ```
/// use presenter_core::ReviewVerdict;
///
/// let ok = ReviewVerdict::accepted();
/// assert!(ok.is_accepted());
///
/// let no = ReviewVerdict::rejected("Split slide 3 into two").unwrap();
/// assert_eq!(no.feedback(), Some("Split slide 3 into two"));
///
/// assert!(ReviewVerdict::rejected("  ").is_err());
///
/// let parsed: Result<ReviewVerdict, _> =
///     serde_json::from_str(r#"{"is_perfect": false, "feedback": null}"#);
/// assert!(parsed.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VerdictFields")]
pub struct ReviewVerdict {
    accepted: bool,
    feedback: Option<String>,
}

#[derive(Deserialize)]
struct VerdictFields {
    #[serde(alias = "is_perfect")]
    accepted: bool,
    #[serde(default)]
    feedback: Option<String>,
}

impl TryFrom<VerdictFields> for ReviewVerdict {
    type Error = PipelineError;

    fn try_from(fields: VerdictFields) -> Result<Self, Self::Error> {
        if fields.accepted {
            return Ok(Self {
                accepted: true,
                feedback: fields.feedback.filter(|f| !f.trim().is_empty()),
            });
        }
        match fields.feedback {
            Some(feedback) if !feedback.trim().is_empty() => Ok(Self {
                accepted: false,
                feedback: Some(feedback),
            }),
            _ => Err(PipelineError::new(PipelineErrorKind::MissingFeedback)),
        }
    }
}

impl ReviewVerdict {
    /// An accepting verdict with no notes.
    pub fn accepted() -> Self {
        Self {
            accepted: true,
            feedback: None,
        }
    }

    /// A rejecting verdict. Fails when `feedback` is blank.
    pub fn rejected(feedback: impl Into<String>) -> PresenterResult<Self> {
        let verdict = Self::try_from(VerdictFields {
            accepted: false,
            feedback: Some(feedback.into()),
        })?;
        Ok(verdict)
    }

    /// Whether the plan was accepted as is.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Reviewer feedback, always present on rejection.
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }
}
