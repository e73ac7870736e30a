//! Core data types for the Presenter workspace.
//!
//! This crate holds the presentation data model shared by every stage of the
//! workflow, plus the provider-neutral request types used to talk to an LLM.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod message;
mod plan;
mod request;
mod role;
mod slide;
mod topic;
mod verdict;

pub use message::Message;
pub use plan::{PresentationPlan, SlideSpec};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use slide::{ComposedSlide, NeighborContext, SlideDraft};
pub use topic::Topic;
pub use verdict::ReviewVerdict;
