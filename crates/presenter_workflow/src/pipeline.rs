//! Presentation pipeline driver.
//!
//! The driver walks an explicit [`Step`] enum: structure, validate, an
//! optional single revision, finalize, then the per-slide fan-out.

use crate::config::{PipelineConfig, PipelineVariant};
use crate::engine::{WorkerPool, compose_requests};
use crate::markdown::assemble_deck;
use crate::stages::compose_slide;
use presenter_core::{ComposedSlide, PresentationPlan, ReviewVerdict, Topic};
use presenter_error::{PipelineError, PipelineErrorKind, PresenterResult};
use presenter_interface::{SlideComposer, StructureGenerator, StructureReviewer, StructureReviser};
use presenter_storage::PresentationDir;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Terminal result of a presentation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutput {
    /// Finalized structure (structure-only runs)
    Plan(PresentationPlan),
    /// Every slide, in plan order (full runs)
    Slides(Vec<ComposedSlide>),
}

/// Where the driver goes next.
#[derive(Debug, Clone, PartialEq, Eq, strum::IntoStaticStr)]
pub enum Step {
    /// Prepare the output directory
    Start,
    /// Ask for a first structure
    CreateStructure,
    /// Review a structure
    Validate(PresentationPlan),
    /// Revise a rejected structure once
    Update(PresentationPlan, ReviewVerdict),
    /// Persist the accepted structure
    Finalize(PresentationPlan),
    /// Fan out slide composition
    ComposeSlides,
    /// Done
    Stop(PipelineOutput),
}

/// Run-scoped context shared by the steps.
#[derive(Debug, Clone)]
pub struct PipelineState {
    /// Subject of the presentation
    pub topic: Topic,
    /// Artifact directory for this topic
    pub output: PresentationDir,
    /// Finalized structure
    pub plan: Option<PresentationPlan>,
    /// Slides in the finalized structure
    pub slide_count: Option<usize>,
}

impl PipelineState {
    /// Fresh state for `topic` under `output_root`.
    pub fn new(topic: Topic, output_root: &std::path::Path) -> Self {
        let output = PresentationDir::for_topic(output_root, &topic);
        Self {
            topic,
            output,
            plan: None,
            slide_count: None,
        }
    }
}

/// Drives one presentation from topic to slides.
///
/// # Example
///
/// ```rust,ignore
/// let agent = Arc::new(StructureAgent::new(driver.clone()));
/// let composer = Arc::new(LlmSlideComposer::new(driver));
/// let pipeline = PresenterPipeline::from_agent(agent, composer, config.pipeline);
/// let output = pipeline.run(Topic::new("Ownership in Rust")?).await?;
/// ```
#[derive(Clone)]
pub struct PresenterPipeline {
    generator: Arc<dyn StructureGenerator>,
    reviewer: Arc<dyn StructureReviewer>,
    reviser: Arc<dyn StructureReviser>,
    composer: Arc<dyn SlideComposer>,
    config: PipelineConfig,
}

impl PresenterPipeline {
    /// Pipeline with a separate collaborator for every step.
    pub fn new(
        generator: Arc<dyn StructureGenerator>,
        reviewer: Arc<dyn StructureReviewer>,
        reviser: Arc<dyn StructureReviser>,
        composer: Arc<dyn SlideComposer>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            generator,
            reviewer,
            reviser,
            composer,
            config,
        }
    }

    /// Pipeline whose structure steps are all handled by `agent`.
    pub fn from_agent<A>(
        agent: Arc<A>,
        composer: Arc<dyn SlideComposer>,
        config: PipelineConfig,
    ) -> Self
    where
        A: StructureGenerator + StructureReviewer + StructureReviser + 'static,
    {
        Self::new(agent.clone(), agent.clone(), agent, composer, config)
    }

    /// Settings this pipeline runs with.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run to completion within the configured deadline.
    ///
    /// Timing out drops every in-flight and queued slide task.
    #[instrument(skip(self, topic), fields(topic = %topic, variant = %self.config.variant))]
    pub async fn run(&self, topic: Topic) -> PresenterResult<PipelineOutput> {
        match tokio::time::timeout(self.config.timeout(), self.drive(topic)).await {
            Ok(result) => result,
            Err(_) => {
                Err(PipelineError::new(PipelineErrorKind::Timeout(self.config.timeout_secs)).into())
            }
        }
    }

    async fn drive(&self, topic: Topic) -> PresenterResult<PipelineOutput> {
        let mut state = PipelineState::new(topic, &self.config.output_root);
        let mut step = Step::Start;

        loop {
            let name: &'static str = (&step).into();
            debug!(step = name, "Entering step");

            step = match step {
                Step::Start => {
                    state.output.create().await?;
                    Step::CreateStructure
                }
                Step::CreateStructure => {
                    let plan = self.generator.generate(&state.topic).await?;
                    info!(slides = plan.len(), "Generated structure");
                    Step::Validate(plan)
                }
                Step::Validate(plan) => {
                    let verdict = self.reviewer.review(&state.topic, &plan).await?;
                    if verdict.is_accepted() {
                        info!("Structure accepted");
                        Step::Finalize(plan)
                    } else {
                        info!(feedback = verdict.feedback().unwrap_or_default(), "Structure rejected");
                        Step::Update(plan, verdict)
                    }
                }
                Step::Update(plan, verdict) => {
                    let revised = self.reviser.revise(&state.topic, &plan, &verdict).await?;
                    info!(slides = revised.len(), "Revised structure");
                    Step::Finalize(revised)
                }
                Step::Finalize(plan) => self.finalize(&mut state, plan).await?,
                Step::ComposeSlides => self.compose_slides(&state).await?,
                Step::Stop(output) => return Ok(output),
            };
        }
    }

    async fn finalize(
        &self,
        state: &mut PipelineState,
        plan: PresentationPlan,
    ) -> PresenterResult<Step> {
        if plan.is_empty() {
            return Err(PipelineError::new(PipelineErrorKind::EmptyPlan).into());
        }

        state.output.write_structure(&plan).await?;
        state.slide_count = Some(plan.len());
        info!(slides = plan.len(), path = %state.output.structure_path().display(), "Finalized structure");

        match self.config.variant {
            PipelineVariant::StructureOnly => Ok(Step::Stop(PipelineOutput::Plan(plan))),
            PipelineVariant::Full => {
                state.plan = Some(plan);
                Ok(Step::ComposeSlides)
            }
        }
    }

    async fn compose_slides(&self, state: &PipelineState) -> PresenterResult<Step> {
        let plan = state
            .plan
            .as_ref()
            .ok_or_else(|| PipelineError::new(PipelineErrorKind::EmptyPlan))?;
        let requests = compose_requests(plan);
        let pool = WorkerPool::new(self.config.compose_workers)?;

        let dir = state.output.clone();
        let topic = state.topic.clone();
        let composer = Arc::clone(&self.composer);

        let slides = pool
            .run(requests, self.config.compose_retry.policy(), move |request| {
                let dir = dir.clone();
                let topic = topic.clone();
                let composer = Arc::clone(&composer);
                async move { compose_slide(&dir, composer.as_ref(), &topic, request).await }
            })
            .await?;

        state.output.write_deck(&assemble_deck(&slides)).await?;
        info!(slides = slides.len(), path = %state.output.deck_path().display(), "Assembled deck");
        Ok(Step::Stop(PipelineOutput::Slides(slides)))
    }
}
