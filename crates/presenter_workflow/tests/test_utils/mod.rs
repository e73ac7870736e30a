//! Test utilities for Presenter workflow tests.
//!
//! Hand-written collaborators that count their calls and return canned data.

#![allow(dead_code)]

pub mod mock_collaborators;

#[allow(unused_imports)]
pub use mock_collaborators::{
    MockComposer, MockEncoder, MockNarrator, MockRenderer, MockStructure, StructureStage,
    plan_of,
};

use presenter_workflow::{PipelineConfig, PipelineVariant, RetryConfig};
use std::path::Path;

/// Pipeline settings writing under `root`, with short retry delays.
pub fn test_pipeline_config(root: &Path, variant: PipelineVariant) -> PipelineConfig {
    PipelineConfig {
        variant,
        output_root: root.to_path_buf(),
        timeout_secs: 30,
        compose_workers: 3,
        compose_retry: RetryConfig {
            max_attempts: 1,
            delay_ms: 1,
        },
    }
}
