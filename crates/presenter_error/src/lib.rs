//! Error types for the Presenter workspace.
//!
//! This crate provides the foundation error types used by every Presenter crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use presenter_error::{PresenterResult, StorageError, StorageErrorKind};
//!
//! fn read_slide() -> PresenterResult<String> {
//!     Err(StorageError::new(StorageErrorKind::FileRead("slide_0/content.md".into())))?
//! }
//!
//! match read_slide() {
//!     Ok(content) => println!("Got: {}", content),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod json;
mod llm;
mod pipeline;
mod storage;
mod video;

pub use config::ConfigError;
pub use error::{PresenterError, PresenterErrorKind, PresenterResult};
pub use json::JsonError;
pub use llm::{LlmError, LlmErrorKind};
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use video::{VideoError, VideoErrorKind};
