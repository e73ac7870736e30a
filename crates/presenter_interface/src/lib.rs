//! Trait definitions for the Presenter workspace.
//!
//! The workflow engine only ever talks to its external collaborators through
//! these traits: LLM and speech providers at the bottom, and the four
//! structure/slide collaborators plus the media tools above them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod collaborators;
mod drivers;
mod types;

pub use collaborators::{
    ClipRenderer, Narrator, SlideComposer, StructureGenerator, StructureReviewer,
    StructureReviser, VideoEncoder,
};
pub use drivers::{LlmDriver, SpeechDriver};
pub use types::RenderedClip;
