//! LLM and speech backed collaborators.
//!
//! Every call asks the model for JSON, pulls the document out of whatever
//! prose surrounds it, and deserializes it into the stage's type. Output the
//! stage cannot use becomes an `InvalidResponse` error naming the stage.

mod extraction;
mod narrator;
mod prompts;
mod slides;
mod structure;

pub use extraction::extract_json;
pub use narrator::SpeechNarrator;
pub use slides::LlmSlideComposer;
pub use structure::StructureAgent;

use crate::config::LlmConfig;
use presenter_core::{GenerateRequest, Message};
use presenter_error::{PipelineError, PipelineErrorKind, PresenterResult};
use presenter_interface::LlmDriver;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Sampling settings applied to every agent request.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GenerationSettings {
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Response length cap
    pub max_tokens: Option<u32>,
}

impl From<&LlmConfig> for GenerationSettings {
    fn from(config: &LlmConfig) -> Self {
        Self {
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

pub(crate) async fn ask_json<D, T>(
    driver: &D,
    settings: &GenerationSettings,
    stage: &str,
    system: &str,
    prompt: String,
) -> PresenterResult<T>
where
    D: LlmDriver + ?Sized,
    T: DeserializeOwned,
{
    let request = GenerateRequest {
        messages: vec![Message::system(system), Message::user(prompt)],
        max_tokens: settings.max_tokens,
        temperature: settings.temperature,
        model: None,
        json_output: true,
    };

    let response = driver.generate(&request).await?;
    debug!(stage, chars = response.text.len(), "Received model response");

    let json = extract_json(&response.text).map_err(|e| invalid_response(stage, e.to_string()))?;
    serde_json::from_str(&json).map_err(|e| invalid_response(stage, e.to_string()).into())
}

#[track_caller]
fn invalid_response(stage: &str, message: String) -> PipelineError {
    PipelineError::new(PipelineErrorKind::InvalidResponse {
        stage: stage.to_string(),
        message,
    })
}
