//! Durable artifact storage for Presenter runs.
//!
//! Each run owns one directory named after its topic. Slides are cached per
//! index so an interrupted run can pick up where it stopped.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod layout;
mod presentation_dir;

pub use layout::{
    AUDIO_FILE, CLIP_FILE, CONTENT_FILE, DECK_FILE, IMAGE_FILE, NARRATION_FILE, STRUCTURE_FILE,
};
pub use presentation_dir::PresentationDir;
