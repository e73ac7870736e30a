//! LLM-backed slide composition.

use crate::agents::{GenerationSettings, ask_json, prompts};
use async_trait::async_trait;
use presenter_core::{NeighborContext, SlideDraft, SlideSpec, Topic};
use presenter_error::PresenterResult;
use presenter_interface::{LlmDriver, SlideComposer};
use tracing::instrument;

/// Writes slide markdown and narration with an LLM.
#[derive(Debug, Clone)]
pub struct LlmSlideComposer<D> {
    driver: D,
    settings: GenerationSettings,
}

impl<D: LlmDriver> LlmSlideComposer<D> {
    /// Composer using `driver` with default sampling.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            settings: GenerationSettings::default(),
        }
    }

    /// Override sampling settings.
    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }
}

#[async_trait]
impl<D: LlmDriver> SlideComposer for LlmSlideComposer<D> {
    #[instrument(skip(self, neighbors), fields(model = %self.driver.model_name(), title = %slide.title()))]
    async fn compose(
        &self,
        topic: &Topic,
        slide: &SlideSpec,
        neighbors: &NeighborContext,
    ) -> PresenterResult<SlideDraft> {
        ask_json(
            &self.driver,
            &self.settings,
            "create_slide",
            prompts::SLIDE_SYSTEM,
            prompts::compose_slide(topic, slide, neighbors),
        )
        .await
    }
}
