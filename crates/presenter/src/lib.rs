//! Presenter: from a topic to a slide deck and a narrated video.
//!
//! Presenter asks an LLM for a slide structure, has it reviewed (and revised
//! at most once), then composes every slide in parallel with a bounded number
//! of workers. Slides are cached on disk per index, so an interrupted run
//! resumes where it stopped. An optional video pipeline narrates each slide
//! and crossfades the rendered clips into one video with ffmpeg.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use presenter::{
//!     LlmSlideComposer, OpenAiDriver, PresenterConfig, PresenterPipeline, StructureAgent, Topic,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PresenterConfig::load(None)?;
//!     let driver = OpenAiDriver::from_env("OPENAI_API_KEY", "gpt-4o-mini")?;
//!
//!     let pipeline = PresenterPipeline::from_agent(
//!         Arc::new(StructureAgent::new(driver.clone())),
//!         Arc::new(LlmSlideComposer::new(driver)),
//!         config.pipeline,
//!     );
//!     let output = pipeline.run(Topic::new("Ownership in Rust")?).await?;
//!     println!("{:?}", output);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `presenter_error` - Error types
//! - `presenter_core` - Topic, plan, slide, and request types
//! - `presenter_interface` - Collaborator and driver traits
//! - `presenter_models` - OpenAI-compatible chat and speech drivers
//! - `presenter_storage` - Per-topic artifact directory and slide cache
//! - `presenter_workflow` - Worker pool, pipelines, agents, and video assembly
//!
//! This crate (`presenter`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use presenter_error::{
    ConfigError, JsonError, LlmError, LlmErrorKind, PipelineError, PipelineErrorKind,
    PresenterError, PresenterErrorKind, PresenterResult, StorageError, StorageErrorKind,
    VideoError, VideoErrorKind,
};

pub use presenter_core::{
    ComposedSlide, GenerateRequest, GenerateRequestBuilder, GenerateResponse, Message,
    NeighborContext, PresentationPlan, ReviewVerdict, Role, SlideDraft, SlideSpec, Topic,
};

pub use presenter_interface::{
    ClipRenderer, LlmDriver, Narrator, RenderedClip, SlideComposer, SpeechDriver,
    StructureGenerator, StructureReviewer, StructureReviser, VideoEncoder,
};

pub use presenter_models::{OpenAiDriver, OpenAiSpeech};

pub use presenter_storage::PresentationDir;

pub use presenter_workflow::agents::{
    GenerationSettings, LlmSlideComposer, SpeechNarrator, StructureAgent, extract_json,
};
pub use presenter_workflow::engine::{RetryPolicy, WorkerPool};
pub use presenter_workflow::video::{FfmpegClipRenderer, FfmpegCommand, FfmpegEncoder, Transition};
pub use presenter_workflow::{
    LlmConfig, PipelineConfig, PipelineOutput, PipelineVariant, PresenterConfig,
    PresenterPipeline, RetryConfig, SpeechConfig, VideoConfig, VideoOutcome, VideoPipeline,
    assemble_deck, sanitize_markdown,
};
