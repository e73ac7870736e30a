//! External collaborators called by the pipeline stages.
//!
//! Each is a black-box request/response call. Failures propagate to the
//! caller unchanged; retry is the engine's business, not the collaborator's.

use crate::RenderedClip;
use async_trait::async_trait;
use presenter_core::{NeighborContext, PresentationPlan, ReviewVerdict, SlideDraft, SlideSpec, Topic};
use presenter_error::PresenterResult;
use std::path::Path;

/// Produces the first draft of a presentation structure.
#[async_trait]
pub trait StructureGenerator: Send + Sync {
    /// Plan the slides for `topic`.
    async fn generate(&self, topic: &Topic) -> PresenterResult<PresentationPlan>;
}

/// Judges whether a structure is ready.
#[async_trait]
pub trait StructureReviewer: Send + Sync {
    /// Accept `plan` or reject it with feedback.
    async fn review(&self, topic: &Topic, plan: &PresentationPlan)
    -> PresenterResult<ReviewVerdict>;
}

/// Rewrites a rejected structure.
#[async_trait]
pub trait StructureReviser: Send + Sync {
    /// Produce a revised plan addressing `verdict`.
    async fn revise(
        &self,
        topic: &Topic,
        plan: &PresentationPlan,
        verdict: &ReviewVerdict,
    ) -> PresenterResult<PresentationPlan>;
}

/// Writes content and narration for a single slide.
#[async_trait]
pub trait SlideComposer: Send + Sync {
    /// Compose `slide`, given summaries of its neighbors.
    async fn compose(
        &self,
        topic: &Topic,
        slide: &SlideSpec,
        neighbors: &NeighborContext,
    ) -> PresenterResult<SlideDraft>;
}

/// Turns a narration script into an audio file.
#[async_trait]
pub trait Narrator: Send + Sync {
    /// Speak `script` into `audio_path`.
    async fn narrate(&self, script: &str, audio_path: &Path) -> PresenterResult<()>;
}

/// Renders one slide clip from a still image and its narration audio.
#[async_trait]
pub trait ClipRenderer: Send + Sync {
    /// Write a clip to `output` and report its duration.
    async fn render(
        &self,
        image: &Path,
        audio: &Path,
        output: &Path,
    ) -> PresenterResult<RenderedClip>;
}

/// Joins ordered clips into the final video.
#[async_trait]
pub trait VideoEncoder: Send + Sync {
    /// Concatenate `clips` in order into `output`.
    async fn concatenate(&self, clips: &[RenderedClip], output: &Path) -> PresenterResult<()>;
}
