//! Composition inputs and outputs for individual slides.

use crate::PresentationPlan;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Summaries of the slides on either side of the one being composed.
///
/// Either side is an empty string at a sequence boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct NeighborContext {
    /// Summary of the previous slide
    previous: String,
    /// Summary of the next slide
    next: String,
}

impl NeighborContext {
    /// Create a context from explicit summaries.
    pub fn new(previous: impl Into<String>, next: impl Into<String>) -> Self {
        Self {
            previous: previous.into(),
            next: next.into(),
        }
    }

    /// Context for the slide at `index` within `plan`.
    ///
    /// # Examples
    ///
    /// ```
    /// use presenter_core::{NeighborContext, PresentationPlan, SlideSpec};
    ///
    /// let plan = PresentationPlan::new(vec![
    ///     SlideSpec::new("A", "first"),
    ///     SlideSpec::new("B", "second"),
    /// ]);
    /// let ctx = NeighborContext::for_index(&plan, 0);
    /// assert_eq!(ctx.previous(), "");
    /// assert_eq!(ctx.next(), "B: second");
    /// ```
    pub fn for_index(plan: &PresentationPlan, index: usize) -> Self {
        let previous = index
            .checked_sub(1)
            .and_then(|i| plan.get(i))
            .map(|spec| spec.summary())
            .unwrap_or_default();
        let next = plan
            .get(index + 1)
            .map(|spec| spec.summary())
            .unwrap_or_default();
        Self { previous, next }
    }
}

/// What the slide composer returns for one slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SlideDraft {
    /// Markdown shown on the slide
    content: String,
    /// Script read aloud over the slide
    narration: String,
}

impl SlideDraft {
    /// Create a draft.
    pub fn new(content: impl Into<String>, narration: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            narration: narration.into(),
        }
    }
}

/// A finished slide, keyed by its position in the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ComposedSlide {
    /// Zero-based position in the plan
    index: usize,
    /// Markdown shown on the slide
    content: String,
    /// Script read aloud over the slide
    narration: String,
}

impl ComposedSlide {
    /// Create a composed slide.
    pub fn new(index: usize, content: impl Into<String>, narration: impl Into<String>) -> Self {
        Self {
            index,
            content: content.into(),
            narration: narration.into(),
        }
    }

    /// Attach a draft to a slide position.
    pub fn from_draft(index: usize, draft: SlideDraft) -> Self {
        Self {
            index,
            content: draft.content,
            narration: draft.narration,
        }
    }
}
