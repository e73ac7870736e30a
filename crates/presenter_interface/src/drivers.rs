//! Provider-level traits.

use async_trait::async_trait;
use presenter_core::{GenerateRequest, GenerateResponse};
use presenter_error::PresenterResult;

/// Core trait that all LLM backends must implement.
#[async_trait]
pub trait LlmDriver: Send + Sync {
    /// Generate model output for a request.
    async fn generate(&self, req: &GenerateRequest) -> PresenterResult<GenerateResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4o-mini").
    fn model_name(&self) -> &str;
}

/// Text-to-speech backend.
#[async_trait]
pub trait SpeechDriver: Send + Sync {
    /// Synthesize `text` into encoded audio bytes.
    async fn synthesize(&self, text: &str) -> PresenterResult<Vec<u8>>;

    /// Voice identifier used for synthesis.
    fn voice(&self) -> &str;
}
