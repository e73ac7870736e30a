//! Video pipeline driver: narrate, render, assemble.

use crate::config::VideoConfig;
use crate::engine::{RetryPolicy, WorkerPool};
use crate::stages::{narrate_slide, render_slide};
use presenter_error::{PipelineError, PipelineErrorKind, PresenterResult};
use presenter_interface::{ClipRenderer, Narrator, RenderedClip, VideoEncoder};
use presenter_storage::PresentationDir;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Terminal result of a video run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoOutcome {
    /// Nothing to render, with the reason
    NothingToDo(String),
    /// Final video written to this path
    Rendered(PathBuf),
}

#[derive(Debug, strum::IntoStaticStr)]
enum VideoStep {
    Start,
    Narrate(usize),
    RenderClips(usize),
    Assemble(Vec<RenderedClip>),
    Stop(VideoOutcome),
}

/// Turns a finalized presentation directory into a narrated video.
#[derive(Clone)]
pub struct VideoPipeline {
    narrator: Arc<dyn Narrator>,
    renderer: Arc<dyn ClipRenderer>,
    encoder: Arc<dyn VideoEncoder>,
    config: VideoConfig,
}

impl VideoPipeline {
    /// Pipeline with the given media collaborators.
    pub fn new(
        narrator: Arc<dyn Narrator>,
        renderer: Arc<dyn ClipRenderer>,
        encoder: Arc<dyn VideoEncoder>,
        config: VideoConfig,
    ) -> Self {
        Self {
            narrator,
            renderer,
            encoder,
            config,
        }
    }

    /// Run against `dir`, which must hold a structure snapshot to do anything.
    ///
    /// A missing snapshot is a soft stop: no collaborator is called. The whole
    /// run fails with `Timeout` once `timeout_secs` elapse.
    #[instrument(skip(self, dir), fields(path = %dir.root().display(), timeout_secs = self.config.timeout_secs))]
    pub async fn run(&self, dir: &PresentationDir) -> PresenterResult<VideoOutcome> {
        match tokio::time::timeout(self.config.timeout(), self.drive(dir)).await {
            Ok(result) => result,
            Err(_) => {
                Err(PipelineError::new(PipelineErrorKind::Timeout(self.config.timeout_secs)).into())
            }
        }
    }

    async fn drive(&self, dir: &PresentationDir) -> PresenterResult<VideoOutcome> {
        let mut step = VideoStep::Start;

        loop {
            let name: &'static str = (&step).into();
            debug!(step = name, "Entering video step");

            step = match step {
                VideoStep::Start => match dir.read_structure().await? {
                    None => {
                        info!("No structure snapshot, skipping video");
                        VideoStep::Stop(VideoOutcome::NothingToDo("No structure found".to_string()))
                    }
                    Some(plan) => VideoStep::Narrate(plan.len()),
                },
                VideoStep::Narrate(count) => {
                    let narrator = Arc::clone(&self.narrator);
                    let slides = dir.clone();
                    WorkerPool::new(self.config.narration_workers)?
                        .run(
                            (0..count).collect::<Vec<usize>>(),
                            self.config.narration_retry.policy(),
                            move |index| {
                                let slides = slides.clone();
                                let narrator = Arc::clone(&narrator);
                                async move { narrate_slide(&slides, narrator.as_ref(), index).await }
                            },
                        )
                        .await?;
                    info!(slides = count, "Narration ready");
                    VideoStep::RenderClips(count)
                }
                VideoStep::RenderClips(count) => {
                    let renderer = Arc::clone(&self.renderer);
                    let slides = dir.clone();
                    let clips = WorkerPool::new(self.config.clip_workers)?
                        .run((0..count).collect::<Vec<usize>>(), RetryPolicy::none(), move |index| {
                            let slides = slides.clone();
                            let renderer = Arc::clone(&renderer);
                            async move { render_slide(&slides, renderer.as_ref(), index).await }
                        })
                        .await?;
                    VideoStep::Assemble(clips)
                }
                VideoStep::Assemble(clips) => {
                    let output = dir.root().join(&self.config.output_file);
                    self.encoder.concatenate(&clips, &output).await?;
                    info!(path = %output.display(), clips = clips.len(), "Video assembled");
                    VideoStep::Stop(VideoOutcome::Rendered(output))
                }
                VideoStep::Stop(outcome) => return Ok(outcome),
            };
        }
    }
}
