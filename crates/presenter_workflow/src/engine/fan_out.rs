//! Per-slide work items derived from a finalized plan.

use presenter_core::{NeighborContext, PresentationPlan, SlideSpec};

/// Everything a worker needs to compose one slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeRequest {
    /// Slide position in the plan
    pub index: usize,
    /// The slide to compose
    pub spec: SlideSpec,
    /// Summaries of the adjacent slides
    pub neighbors: NeighborContext,
}

/// One request per slide, in plan order.
///
/// ```
/// use presenter_core::{PresentationPlan, SlideSpec};
/// use presenter_workflow::engine::compose_requests;
///
/// let plan = PresentationPlan::new(vec![
///     SlideSpec::new("Intro", "Why it matters"),
///     SlideSpec::new("Detail", "How it works"),
/// ]);
/// let requests = compose_requests(&plan);
/// assert_eq!(requests.len(), 2);
/// assert_eq!(requests[0].neighbors.previous(), "");
/// assert_eq!(requests[0].neighbors.next(), "Detail: How it works");
/// ```
pub fn compose_requests(plan: &PresentationPlan) -> Vec<ComposeRequest> {
    plan.slides()
        .iter()
        .enumerate()
        .map(|(index, spec)| ComposeRequest {
            index,
            spec: spec.clone(),
            neighbors: NeighborContext::for_index(plan, index),
        })
        .collect()
}
