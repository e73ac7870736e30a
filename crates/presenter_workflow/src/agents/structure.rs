//! LLM-backed structure generation, review, and revision.

use crate::agents::{GenerationSettings, ask_json, prompts};
use async_trait::async_trait;
use presenter_core::{PresentationPlan, ReviewVerdict, Topic};
use presenter_error::PresenterResult;
use presenter_interface::{LlmDriver, StructureGenerator, StructureReviewer, StructureReviser};
use tracing::instrument;

/// One LLM playing all three structure roles.
#[derive(Debug, Clone)]
pub struct StructureAgent<D> {
    driver: D,
    settings: GenerationSettings,
}

impl<D: LlmDriver> StructureAgent<D> {
    /// Agent using `driver` with default sampling.
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
impl<D: LlmDriver> StructureGenerator for StructureAgent<D> {
    #[instrument(skip(self), fields(model = %self.driver.model_name()))]
    async fn generate(&self, topic: &Topic) -> PresenterResult<PresentationPlan> {
        ask_json(
            &self.driver,
            &self.settings,
            "create_structure",
            prompts::STRUCTURE_SYSTEM,
            prompts::create_structure(topic),
        )
        .await
    }
}

#[async_trait]
impl<D: LlmDriver> StructureReviewer for StructureAgent<D> {
    #[instrument(skip(self, plan), fields(model = %self.driver.model_name(), slides = plan.len()))]
    async fn review(
        &self,
        topic: &Topic,
        plan: &PresentationPlan,
    ) -> PresenterResult<ReviewVerdict> {
        ask_json(
            &self.driver,
            &self.settings,
            "validate_structure",
            prompts::STRUCTURE_SYSTEM,
            prompts::review_structure(topic, plan),
        )
        .await
    }
}

#[async_trait]
impl<D: LlmDriver> StructureReviser for StructureAgent<D> {
    #[instrument(skip(self, plan, verdict), fields(model = %self.driver.model_name(), slides = plan.len()))]
    async fn revise(
        &self,
        topic: &Topic,
        plan: &PresentationPlan,
        verdict: &ReviewVerdict,
    ) -> PresenterResult<PresentationPlan> {
        ask_json(
            &self.driver,
            &self.settings,
            "update_structure",
            prompts::STRUCTURE_SYSTEM,
            prompts::revise_structure(topic, plan, verdict),
        )
        .await
    }
}
