//! Workflow engine and pipelines for Presenter.
//!
//! The presentation pipeline turns a topic into a reviewed slide structure
//! and then composes every slide in parallel. The video pipeline narrates
//! those slides and stitches rendered clips into one crossfaded video.
//!
//! # Architecture
//!
//! - [`engine`]: bounded worker pool, constant-delay retry, ordered join barrier
//! - [`stages`]: per-slide functions that skip work already on disk
//! - [`PresenterPipeline`] / [`VideoPipeline`]: step-enum drivers
//! - [`agents`]: LLM and speech backed collaborators
//! - [`video`]: ffmpeg command building and process-backed collaborators

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod agents;
mod config;
pub mod engine;
mod markdown;
mod pipeline;
pub mod stages;
pub mod video;

pub use config::{
    LlmConfig, PipelineConfig, PipelineVariant, PresenterConfig, RetryConfig, SpeechConfig,
    VideoConfig,
};
pub use markdown::{PRESENTATION_CONFIG, SLIDE_SEPARATOR, assemble_deck, sanitize_markdown};
pub use pipeline::{PipelineOutput, PipelineState, PresenterPipeline, Step};
pub use video::{VideoOutcome, VideoPipeline};
