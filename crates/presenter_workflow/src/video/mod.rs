//! Narrated video assembly from a finished presentation directory.

mod ffmpeg;
mod pipeline;
mod process;

pub use ffmpeg::{FfmpegCommand, Transition};
pub use pipeline::{VideoOutcome, VideoPipeline};
pub use process::{FfmpegClipRenderer, FfmpegEncoder, run_command};
