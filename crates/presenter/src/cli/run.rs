//! Presentation command handler.

use crate::cli::Cli;
use presenter::{
    FfmpegClipRenderer, FfmpegEncoder, GenerationSettings, LlmSlideComposer, OpenAiDriver,
    OpenAiSpeech, PipelineOutput, PipelineVariant, PresentationDir, PresenterConfig,
    PresenterPipeline, PresenterResult, SpeechNarrator, StructureAgent, Topic, Transition,
    VideoOutcome, VideoPipeline,
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Run the presentation pipeline for `cli.topic`, then the video pipeline if asked.
#[instrument(skip(cli), fields(topic = %cli.topic))]
pub async fn run_presentation(cli: &Cli) -> PresenterResult<()> {
    let mut config = PresenterConfig::load(cli.config.as_deref())?;
    if cli.structure_only {
        config.pipeline.variant = PipelineVariant::StructureOnly;
    }
    if let Some(root) = &cli.output_root {
        config.pipeline.output_root = root.clone();
    }

    let topic = Topic::new(cli.topic.as_str())?;
    let driver = OpenAiDriver::from_env(&config.llm.api_key_env, &config.llm.model)?
        .with_base_url(config.llm.base_url.as_str());
    let settings = GenerationSettings::from(&config.llm);

    let pipeline = PresenterPipeline::from_agent(
        Arc::new(StructureAgent::new(driver.clone()).with_settings(settings)),
        Arc::new(LlmSlideComposer::new(driver).with_settings(settings)),
        config.pipeline.clone(),
    );

    let dir = PresentationDir::for_topic(&config.pipeline.output_root, &topic);
    match pipeline.run(topic).await? {
        PipelineOutput::Plan(plan) => {
            println!("Structure ({} slides):", plan.len());
            for (i, slide) in plan.slides().iter().enumerate() {
                println!("  {}. {}", i + 1, slide.summary());
            }
            println!("Saved to {}", dir.structure_path().display());
        }
        PipelineOutput::Slides(slides) => {
            info!(slides = slides.len(), "Presentation complete");
            println!("Deck with {} slides saved to {}", slides.len(), dir.deck_path().display());
        }
    }

    if cli.video {
        let speech = OpenAiSpeech::from_env(
            &config.llm.api_key_env,
            &config.speech.model,
            &config.speech.voice,
        )?
        .with_base_url(config.speech.base_url.as_str());

        let video = VideoPipeline::new(
            Arc::new(SpeechNarrator::new(speech)),
            Arc::new(FfmpegClipRenderer::new(&config.video.ffmpeg, &config.video.ffprobe)),
            Arc::new(FfmpegEncoder::new(
                &config.video.ffmpeg,
                Transition::new(&config.video.transition, config.video.transition_secs),
            )),
            config.video.clone(),
        );

        match video.run(&dir).await? {
            VideoOutcome::NothingToDo(reason) => println!("No video rendered: {}", reason),
            VideoOutcome::Rendered(path) => println!("Video saved to {}", path.display()),
        }
    }

    Ok(())
}
