//! Video pipeline runs against mock media collaborators.

mod test_utils;

use presenter_core::ComposedSlide;
use presenter_error::{PipelineErrorKind, PresenterErrorKind, StorageErrorKind};
use presenter_storage::PresentationDir;
use presenter_workflow::{VideoConfig, VideoOutcome, VideoPipeline};
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;
use test_utils::{MockEncoder, MockNarrator, MockRenderer, plan_of};

struct Harness {
    narrator: Arc<MockNarrator>,
    renderer: Arc<MockRenderer>,
    encoder: Arc<MockEncoder>,
    pipeline: VideoPipeline,
}

fn harness() -> Harness {
    harness_with(MockNarrator::default(), MockRenderer::default(), VideoConfig::default())
}

fn harness_with(narrator: MockNarrator, renderer: MockRenderer, mut config: VideoConfig) -> Harness {
    let narrator = Arc::new(narrator);
    let renderer = Arc::new(renderer);
    let encoder = Arc::new(MockEncoder::default());
    config.narration_retry.delay_ms = 1;

    let pipeline = VideoPipeline::new(
        narrator.clone(),
        renderer.clone(),
        encoder.clone(),
        config,
    );
    Harness {
        narrator,
        renderer,
        encoder,
        pipeline,
    }
}

async fn finished_presentation(root: &std::path::Path, titles: &[&str]) -> PresentationDir {
    let dir = PresentationDir::new(root.join("talk"));
    dir.create().await.unwrap();
    dir.write_structure(&plan_of(titles)).await.unwrap();
    for (i, title) in titles.iter().enumerate() {
        dir.write_slide(&ComposedSlide::new(i, format!("# {}", title), format!("About {}", title)))
            .await
            .unwrap();
        std::fs::write(dir.image_path(i), b"png").unwrap();
    }
    dir
}

#[tokio::test]
async fn test_missing_structure_is_soft_stop() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = PresentationDir::new(temp_dir.path().join("empty"));
    let h = harness();

    let outcome = h.pipeline.run(&dir).await.unwrap();

    assert_eq!(
        outcome,
        VideoOutcome::NothingToDo("No structure found".to_string())
    );
    assert_eq!(h.narrator.calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.renderer.calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.encoder.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_full_video_run() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = finished_presentation(temp_dir.path(), &["Intro", "Middle", "End"]).await;
    let h = harness();

    let outcome = h.pipeline.run(&dir).await.unwrap();

    assert_eq!(
        outcome,
        VideoOutcome::Rendered(dir.root().join("presentation.mp4"))
    );
    assert_eq!(h.narrator.calls.load(Ordering::SeqCst), 3);
    assert_eq!(h.renderer.calls.load(Ordering::SeqCst), 3);
    assert_eq!(h.encoder.calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        *h.encoder.joined.lock().unwrap(),
        vec![dir.clip_path(0), dir.clip_path(1), dir.clip_path(2)]
    );
    assert_eq!(
        std::fs::read_to_string(dir.audio_path(1)).unwrap(),
        "About Middle"
    );
}

#[tokio::test]
async fn test_existing_audio_not_narrated_again() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = finished_presentation(temp_dir.path(), &["One", "Two"]).await;
    std::fs::write(dir.audio_path(0), b"already spoken").unwrap();
    let h = harness();

    h.pipeline.run(&dir).await.unwrap();

    assert_eq!(h.narrator.calls.load(Ordering::SeqCst), 1);
    assert_eq!(std::fs::read(dir.audio_path(0)).unwrap(), b"already spoken");
}

#[tokio::test]
async fn test_missing_image_fails_before_encoding() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = finished_presentation(temp_dir.path(), &["One", "Two"]).await;
    std::fs::remove_file(dir.image_path(1)).unwrap();
    let h = harness();

    let err = h.pipeline.run(&dir).await.unwrap_err();

    assert!(matches!(
        err.kind(),
        PresenterErrorKind::Storage(e) if matches!(e.kind, StorageErrorKind::NotFound(_))
    ));
    assert_eq!(h.encoder.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_interrupted_narration_is_synthesized_again() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = finished_presentation(temp_dir.path(), &["One", "Two"]).await;
    let interrupted = harness_with(
        MockNarrator::interrupted("About Two"),
        MockRenderer::default(),
        VideoConfig::default(),
    );

    assert!(interrupted.pipeline.run(&dir).await.is_err());
    assert!(!dir.audio_path(1).exists());
    assert_eq!(interrupted.encoder.calls.load(Ordering::SeqCst), 0);

    let h = harness();
    h.pipeline.run(&dir).await.unwrap();

    assert_eq!(std::fs::read_to_string(dir.audio_path(1)).unwrap(), "About Two");
    assert!(!dir.staged_audio_path(1).exists());
    assert_eq!(h.encoder.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_hung_renderer_times_out() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = finished_presentation(temp_dir.path(), &["One", "Two"]).await;
    let config = VideoConfig {
        timeout_secs: 1,
        ..VideoConfig::default()
    };
    let h = harness_with(
        MockNarrator::default(),
        MockRenderer::slow(Duration::from_secs(30)),
        config,
    );

    let err = h.pipeline.run(&dir).await.unwrap_err();

    assert!(matches!(
        err.kind(),
        PresenterErrorKind::Pipeline(e) if e.kind == PipelineErrorKind::Timeout(1)
    ));
    assert_eq!(h.encoder.calls.load(Ordering::SeqCst), 0);
}
