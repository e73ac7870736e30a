//! Per-slide stage functions run inside the worker pool.
//!
//! Each stage is idempotent against the presentation directory: work whose
//! artifacts are already on disk is skipped.

use crate::engine::ComposeRequest;
use presenter_core::{ComposedSlide, Topic};
use presenter_error::{PresenterResult, StorageError, StorageErrorKind};
use presenter_interface::{ClipRenderer, Narrator, RenderedClip, SlideComposer};
use presenter_storage::PresentationDir;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Compose one slide, or return the cached copy.
///
/// The cache check and the write are separate steps; two runs composing the
/// same directory at once may both call the composer.
#[instrument(skip_all, fields(slide_index = request.index, title = %request.spec.title()))]
pub async fn compose_slide(
    dir: &PresentationDir,
    composer: &dyn SlideComposer,
    topic: &Topic,
    request: ComposeRequest,
) -> PresenterResult<ComposedSlide> {
    if let Some(cached) = dir.read_slide(request.index).await? {
        debug!("Using cached slide");
        return Ok(cached);
    }

    let draft = composer
        .compose(topic, &request.spec, &request.neighbors)
        .await?;
    let slide = ComposedSlide::from_draft(request.index, draft);
    dir.write_slide(&slide).await?;
    info!("Composed slide");
    Ok(slide)
}

/// Synthesize narration audio for slide `index` unless it already exists.
///
/// The narrator writes to a staging path; audio only reaches its final
/// path once the narrator has returned successfully.
#[instrument(skip(dir, narrator), fields(path = %dir.root().display()))]
pub async fn narrate_slide(
    dir: &PresentationDir,
    narrator: &dyn Narrator,
    index: usize,
) -> PresenterResult<PathBuf> {
    let audio_path = dir.audio_path(index);
    if PresentationDir::exists(&audio_path).await {
        debug!(slide_index = index, "Narration audio already exists");
        return Ok(audio_path);
    }

    let script = dir.read_narration(index).await?;
    narrator.narrate(&script, &dir.staged_audio_path(index)).await?;
    dir.commit_audio(index).await?;
    info!(slide_index = index, "Narrated slide");
    Ok(audio_path)
}

/// Render the clip for slide `index` from its image and narration audio.
#[instrument(skip(dir, renderer), fields(path = %dir.root().display()))]
pub async fn render_slide(
    dir: &PresentationDir,
    renderer: &dyn ClipRenderer,
    index: usize,
) -> PresenterResult<RenderedClip> {
    let image_path = dir.image_path(index);
    if !PresentationDir::exists(&image_path).await {
        return Err(StorageError::new(StorageErrorKind::NotFound(
            image_path.display().to_string(),
        ))
        .into());
    }

    let clip = renderer
        .render(&image_path, &dir.audio_path(index), &dir.clip_path(index))
        .await?;
    info!(slide_index = index, duration_secs = *clip.duration_secs(), "Rendered clip");
    Ok(clip)
}
