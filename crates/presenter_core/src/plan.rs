//! Planned slides and the presentation structure.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A planned, not yet composed slide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct SlideSpec {
    /// Slide title
    title: String,
    /// The single idea this slide carries
    atomic_core_idea: String,
}

impl SlideSpec {
    /// Create a slide spec.
    pub fn new(title: impl Into<String>, atomic_core_idea: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            atomic_core_idea: atomic_core_idea.into(),
        }
    }

    /// One-line summary used as neighbor context for adjacent slides.
    pub fn summary(&self) -> String {
        format!("{}: {}", self.title, self.atomic_core_idea)
    }
}

/// Ordered slides making up a presentation.
///
/// Each slide should hold one idea narratable in roughly 40-50 seconds. That
/// is judged by the review stage, not enforced here.
///
/// # Examples
///
/// ```
/// use presenter_core::{PresentationPlan, SlideSpec};
///
/// let plan = PresentationPlan::new(vec![
///     SlideSpec::new("Borrowing", "References never outlive their owner"),
///     SlideSpec::new("Lifetimes", "Lifetimes name how long a borrow lasts"),
/// ]);
/// assert_eq!(plan.len(), 2);
///
/// let json = serde_json::to_string(&plan).unwrap();
/// assert!(json.starts_with("{\"slides\":"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PresentationPlan {
    slides: Vec<SlideSpec>,
}

impl PresentationPlan {
    /// Create a plan from slides in presentation order.
    pub fn new(slides: Vec<SlideSpec>) -> Self {
        Self { slides }
    }

    /// Slides in presentation order.
    pub fn slides(&self) -> &[SlideSpec] {
        &self.slides
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the plan has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&SlideSpec> {
        self.slides.get(index)
    }
}
