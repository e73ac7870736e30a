//! Mock collaborators.

use async_trait::async_trait;
use presenter_core::{
    NeighborContext, PresentationPlan, ReviewVerdict, SlideDraft, SlideSpec, Topic,
};
use presenter_error::{LlmError, LlmErrorKind, PresenterResult};
use presenter_interface::{
    ClipRenderer, Narrator, RenderedClip, SlideComposer, StructureGenerator, StructureReviewer,
    StructureReviser, VideoEncoder,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Plan with one slide per title; the core idea is derived from the title.
pub fn plan_of(titles: &[&str]) -> PresentationPlan {
    PresentationPlan::new(
        titles
            .iter()
            .map(|t| SlideSpec::new(*t, format!("{} idea", t)))
            .collect(),
    )
}

/// Structure step a [`MockStructure`] can be told to fail at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureStage {
    Generate,
    Review,
    Revise,
}

/// Structure generator, reviewer, and reviser in one.
pub struct MockStructure {
    pub initial: PresentationPlan,
    pub revised: PresentationPlan,
    pub verdict: ReviewVerdict,
    pub fail_at: Option<StructureStage>,
    pub generate_calls: AtomicUsize,
    pub review_calls: AtomicUsize,
    pub revise_calls: AtomicUsize,
}

impl MockStructure {
    pub fn accepting(plan: PresentationPlan) -> Self {
        Self {
            initial: plan.clone(),
            revised: plan,
            verdict: ReviewVerdict::accepted(),
            fail_at: None,
            generate_calls: AtomicUsize::new(0),
            review_calls: AtomicUsize::new(0),
            revise_calls: AtomicUsize::new(0),
        }
    }

    pub fn rejecting(initial: PresentationPlan, revised: PresentationPlan, feedback: &str) -> Self {
        Self {
            initial,
            revised,
            verdict: ReviewVerdict::rejected(feedback).unwrap(),
            fail_at: None,
            generate_calls: AtomicUsize::new(0),
            review_calls: AtomicUsize::new(0),
            revise_calls: AtomicUsize::new(0),
        }
    }

    /// Rejects its first plan and fails with a rate limit at `stage`.
    pub fn failing(stage: StructureStage) -> Self {
        Self {
            fail_at: Some(stage),
            ..Self::rejecting(plan_of(&["Draft"]), plan_of(&["Final"]), "Split the draft")
        }
    }

    fn outcome<T>(&self, stage: StructureStage, value: T) -> PresenterResult<T> {
        if self.fail_at == Some(stage) {
            return Err(LlmError::new(LlmErrorKind::RateLimited).into());
        }
        Ok(value)
    }
}

#[async_trait]
impl StructureGenerator for MockStructure {
    async fn generate(&self, _topic: &Topic) -> PresenterResult<PresentationPlan> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        self.outcome(StructureStage::Generate, self.initial.clone())
    }
}

#[async_trait]
impl StructureReviewer for MockStructure {
    async fn review(
        &self,
        _topic: &Topic,
        _plan: &PresentationPlan,
    ) -> PresenterResult<ReviewVerdict> {
        self.review_calls.fetch_add(1, Ordering::SeqCst);
        self.outcome(StructureStage::Review, self.verdict.clone())
    }
}

#[async_trait]
impl StructureReviser for MockStructure {
    async fn revise(
        &self,
        _topic: &Topic,
        _plan: &PresentationPlan,
        verdict: &ReviewVerdict,
    ) -> PresenterResult<PresentationPlan> {
        assert!(verdict.feedback().is_some(), "Reviser needs feedback");
        self.revise_calls.fetch_add(1, Ordering::SeqCst);
        self.outcome(StructureStage::Revise, self.revised.clone())
    }
}

/// Slide composer echoing its inputs, optionally slow or flaky.
#[derive(Default)]
pub struct MockComposer {
    pub delay: Duration,
    /// Transient failures to return per slide title before succeeding
    pub failures: HashMap<String, usize>,
    pub calls: AtomicUsize,
    pub active: AtomicUsize,
    pub max_active: AtomicUsize,
    pub neighbors: Mutex<Vec<(String, NeighborContext)>>,
    failed: Mutex<HashMap<String, usize>>,
}

impl MockComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    pub fn flaky(title: &str, failures: usize) -> Self {
        Self {
            failures: HashMap::from([(title.to_string(), failures)]),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SlideComposer for MockComposer {
    async fn compose(
        &self,
        topic: &Topic,
        slide: &SlideSpec,
        neighbors: &NeighborContext,
    ) -> PresenterResult<SlideDraft> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active.fetch_max(now, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.active.fetch_sub(1, Ordering::SeqCst);

        let allowed = self.failures.get(slide.title()).copied().unwrap_or(0);
        {
            let mut failed = self.failed.lock().unwrap();
            let count = failed.entry(slide.title().clone()).or_insert(0);
            if *count < allowed {
                *count += 1;
                return Err(LlmError::new(LlmErrorKind::RateLimited).into());
            }
        }

        self.neighbors
            .lock()
            .unwrap()
            .push((slide.title().clone(), neighbors.clone()));

        Ok(SlideDraft::new(
            format!("# {}\n{}", slide.title(), slide.atomic_core_idea()),
            format!("{} narration about {}", slide.title(), topic),
        ))
    }
}

/// Narrator writing the script bytes as fake audio.
#[derive(Default)]
pub struct MockNarrator {
    pub calls: AtomicUsize,
    /// Script whose audio is cut off halfway, followed by a permanent error
    pub interrupt: Option<String>,
}

impl MockNarrator {
    pub fn interrupted(script: &str) -> Self {
        Self {
            interrupt: Some(script.to_string()),
            ..Self::default()
        }
    }
}

#[async_trait]
impl Narrator for MockNarrator {
    async fn narrate(&self, script: &str, audio_path: &Path) -> PresenterResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.interrupt.as_deref() == Some(script) {
            let half = &script.as_bytes()[..script.len() / 2];
            tokio::fs::write(audio_path, half).await.unwrap();
            return Err(LlmError::new(LlmErrorKind::Api {
                status: 400,
                message: "voice unavailable".to_string(),
            })
            .into());
        }
        tokio::fs::write(audio_path, script.as_bytes()).await.unwrap();
        Ok(())
    }
}

/// Renderer reporting a fixed clip length without touching disk.
pub struct MockRenderer {
    pub duration_secs: f64,
    pub delay: Duration,
    pub calls: AtomicUsize,
}

impl MockRenderer {
    /// Renderer that hangs for `delay` on every clip.
    pub fn slow(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }
}

impl Default for MockRenderer {
    fn default() -> Self {
        Self {
            duration_secs: 5.0,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ClipRenderer for MockRenderer {
    async fn render(
        &self,
        _image: &Path,
        _audio: &Path,
        output: &Path,
    ) -> PresenterResult<RenderedClip> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(RenderedClip::new(output, self.duration_secs))
    }
}

/// Encoder recording what it was asked to join.
#[derive(Default)]
pub struct MockEncoder {
    pub calls: AtomicUsize,
    pub joined: Mutex<Vec<PathBuf>>,
}

#[async_trait]
impl VideoEncoder for MockEncoder {
    async fn concatenate(&self, clips: &[RenderedClip], _output: &Path) -> PresenterResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.joined.lock().unwrap() = clips.iter().map(|c| c.path().clone()).collect();
        Ok(())
    }
}
