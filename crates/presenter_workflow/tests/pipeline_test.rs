//! End-to-end runs of the presentation pipeline against mock collaborators.

mod test_utils;

use presenter_core::Topic;
use presenter_error::{PipelineErrorKind, PresenterErrorKind};
use presenter_storage::PresentationDir;
use presenter_workflow::{
    PRESENTATION_CONFIG, PipelineOutput, PipelineVariant, PresenterPipeline, SLIDE_SEPARATOR,
};
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;
use test_utils::{MockComposer, MockStructure, StructureStage, plan_of, test_pipeline_config};

fn pipeline(
    structure: &Arc<MockStructure>,
    composer: &Arc<MockComposer>,
    root: &std::path::Path,
    variant: PipelineVariant,
) -> PresenterPipeline {
    PresenterPipeline::from_agent(
        Arc::clone(structure),
        Arc::clone(composer) as Arc<dyn presenter_interface::SlideComposer>,
        test_pipeline_config(root, variant),
    )
}

fn slides(output: PipelineOutput) -> Vec<presenter_core::ComposedSlide> {
    match output {
        PipelineOutput::Slides(slides) => slides,
        PipelineOutput::Plan(_) => panic!("Expected slides, got plan"),
    }
}

#[tokio::test]
async fn test_accepted_structure_composes_every_slide_in_order() {
    let temp_dir = tempfile::tempdir().unwrap();
    let structure = Arc::new(MockStructure::accepting(plan_of(&["Intro", "Body", "Outro"])));
    let composer = Arc::new(MockComposer::new());

    let output = pipeline(&structure, &composer, temp_dir.path(), PipelineVariant::Full)
        .run(Topic::new("Ownership").unwrap())
        .await
        .unwrap();
    let slides = slides(output);

    assert_eq!(slides.len(), 3);
    for (i, slide) in slides.iter().enumerate() {
        assert_eq!(*slide.index(), i);
    }
    assert!(slides[1].content().starts_with("# Body"));

    assert_eq!(structure.generate_calls.load(Ordering::SeqCst), 1);
    assert_eq!(structure.review_calls.load(Ordering::SeqCst), 1);
    assert_eq!(structure.revise_calls.load(Ordering::SeqCst), 0);
    assert_eq!(composer.calls(), 3);

    let dir = PresentationDir::new(temp_dir.path().join("ownership"));
    assert_eq!(
        dir.read_structure().await.unwrap(),
        Some(plan_of(&["Intro", "Body", "Outro"]))
    );

    let deck = std::fs::read_to_string(dir.deck_path()).unwrap();
    assert!(deck.starts_with(PRESENTATION_CONFIG));
    assert_eq!(deck.matches(SLIDE_SEPARATOR).count(), 2);
    assert!(deck.find("### Intro").unwrap() < deck.find("### Outro").unwrap());
}

#[tokio::test]
async fn test_neighbor_context_passed_to_composer() {
    let temp_dir = tempfile::tempdir().unwrap();
    let structure = Arc::new(MockStructure::accepting(plan_of(&["A", "B", "C"])));
    let composer = Arc::new(MockComposer::new());

    pipeline(&structure, &composer, temp_dir.path(), PipelineVariant::Full)
        .run(Topic::new("Letters").unwrap())
        .await
        .unwrap();

    let seen = composer.neighbors.lock().unwrap();
    let (_, first) = seen.iter().find(|(t, _)| t == "A").unwrap();
    let (_, middle) = seen.iter().find(|(t, _)| t == "B").unwrap();
    let (_, last) = seen.iter().find(|(t, _)| t == "C").unwrap();

    assert_eq!(first.previous(), "");
    assert_eq!(first.next(), "B: B idea");
    assert_eq!(middle.previous(), "A: A idea");
    assert_eq!(middle.next(), "C: C idea");
    assert_eq!(last.next(), "");
}

#[tokio::test]
async fn test_rejected_structure_revised_exactly_once() {
    let temp_dir = tempfile::tempdir().unwrap();
    let structure = Arc::new(MockStructure::rejecting(
        plan_of(&["Everything"]),
        plan_of(&["Part one", "Part two"]),
        "Split the only slide in two",
    ));
    let composer = Arc::new(MockComposer::new());

    let output = pipeline(
        &structure,
        &composer,
        temp_dir.path(),
        PipelineVariant::StructureOnly,
    )
    .run(Topic::new("Scope").unwrap())
    .await
    .unwrap();

    assert_eq!(output, PipelineOutput::Plan(plan_of(&["Part one", "Part two"])));
    assert_eq!(structure.review_calls.load(Ordering::SeqCst), 1);
    assert_eq!(structure.revise_calls.load(Ordering::SeqCst), 1);
    assert_eq!(composer.calls(), 0);
}

#[tokio::test]
async fn test_structure_only_writes_snapshot_without_slides() {
    let temp_dir = tempfile::tempdir().unwrap();
    let structure = Arc::new(MockStructure::accepting(plan_of(&["Only"])));
    let composer = Arc::new(MockComposer::new());

    pipeline(
        &structure,
        &composer,
        temp_dir.path(),
        PipelineVariant::StructureOnly,
    )
    .run(Topic::new("Brief Talk").unwrap())
    .await
    .unwrap();

    let dir = PresentationDir::new(temp_dir.path().join("brief_talk"));
    assert!(dir.structure_path().exists());
    assert!(!dir.deck_path().exists());
    assert!(!dir.slide_dir(0).exists());
}

#[tokio::test]
async fn test_second_run_reuses_cached_slides() {
    let temp_dir = tempfile::tempdir().unwrap();
    let structure = Arc::new(MockStructure::accepting(plan_of(&["One", "Two", "Three"])));
    let composer = Arc::new(MockComposer::new());
    let topic = Topic::new("Caching").unwrap();

    let first = pipeline(&structure, &composer, temp_dir.path(), PipelineVariant::Full)
        .run(topic.clone())
        .await
        .unwrap();
    let dir = PresentationDir::new(temp_dir.path().join("caching"));
    let content_before = std::fs::read(dir.content_path(1)).unwrap();

    let second = pipeline(&structure, &composer, temp_dir.path(), PipelineVariant::Full)
        .run(topic)
        .await
        .unwrap();

    assert_eq!(composer.calls(), 3);
    assert_eq!(first, second);
    assert_eq!(std::fs::read(dir.content_path(1)).unwrap(), content_before);
}

#[tokio::test]
async fn test_partial_cache_recomposes_only_missing_slides() {
    let temp_dir = tempfile::tempdir().unwrap();
    let structure = Arc::new(MockStructure::accepting(plan_of(&["One", "Two"])));
    let composer = Arc::new(MockComposer::new());
    let topic = Topic::new("Resume").unwrap();

    pipeline(&structure, &composer, temp_dir.path(), PipelineVariant::Full)
        .run(topic.clone())
        .await
        .unwrap();

    let dir = PresentationDir::new(temp_dir.path().join("resume"));
    std::fs::remove_file(dir.narration_path(0)).unwrap();

    pipeline(&structure, &composer, temp_dir.path(), PipelineVariant::Full)
        .run(topic)
        .await
        .unwrap();

    assert_eq!(composer.calls(), 3);
    assert!(dir.narration_path(0).exists());
}

#[tokio::test]
async fn test_empty_plan_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let structure = Arc::new(MockStructure::accepting(plan_of(&[])));
    let composer = Arc::new(MockComposer::new());

    let err = pipeline(&structure, &composer, temp_dir.path(), PipelineVariant::Full)
        .run(Topic::new("Nothing").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(
        err.kind(),
        PresenterErrorKind::Pipeline(e) if e.kind == PipelineErrorKind::EmptyPlan
    ));
    assert_eq!(composer.calls(), 0);
}

#[tokio::test]
async fn test_transient_compose_failure_retried() {
    let temp_dir = tempfile::tempdir().unwrap();
    let structure = Arc::new(MockStructure::accepting(plan_of(&["Steady", "Shaky"])));
    let composer = Arc::new(MockComposer::flaky("Shaky", 1));

    let mut config = test_utils::test_pipeline_config(temp_dir.path(), PipelineVariant::Full);
    config.compose_retry.max_attempts = 2;
    let pipeline = PresenterPipeline::from_agent(
        Arc::clone(&structure),
        Arc::clone(&composer) as Arc<dyn presenter_interface::SlideComposer>,
        config,
    );

    let slides = slides(pipeline.run(Topic::new("Retry").unwrap()).await.unwrap());
    assert_eq!(slides.len(), 2);
    assert_eq!(composer.calls(), 3);
}

#[tokio::test]
async fn test_compose_failure_without_retry_aborts_run() {
    let temp_dir = tempfile::tempdir().unwrap();
    let structure = Arc::new(MockStructure::accepting(plan_of(&["Steady", "Shaky"])));
    let composer = Arc::new(MockComposer::flaky("Shaky", 1));

    let err = pipeline(&structure, &composer, temp_dir.path(), PipelineVariant::Full)
        .run(Topic::new("No Retry").unwrap())
        .await
        .unwrap_err();

    assert!(err.is_transient());
    assert!(!temp_dir.path().join("no_retry").join("presentation.md").exists());
}

#[tokio::test]
async fn test_run_times_out() {
    let temp_dir = tempfile::tempdir().unwrap();
    let structure = Arc::new(MockStructure::accepting(plan_of(&["Slow"])));
    let composer = Arc::new(MockComposer::slow(Duration::from_secs(30)));

    let mut config = test_utils::test_pipeline_config(temp_dir.path(), PipelineVariant::Full);
    config.timeout_secs = 1;
    let pipeline = PresenterPipeline::from_agent(
        Arc::clone(&structure),
        Arc::clone(&composer) as Arc<dyn presenter_interface::SlideComposer>,
        config,
    );

    let err = pipeline
        .run(Topic::new("Patience").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(
        err.kind(),
        PresenterErrorKind::Pipeline(e) if e.kind == PipelineErrorKind::Timeout(1)
    ));
}

#[tokio::test]
async fn test_structure_failures_abort_without_retry() {
    // (failing stage, expected generate/review/revise calls)
    let cases = [
        (StructureStage::Generate, [1, 0, 0]),
        (StructureStage::Review, [1, 1, 0]),
        (StructureStage::Revise, [1, 1, 1]),
    ];

    for (stage, expected_calls) in cases {
        let temp_dir = tempfile::tempdir().unwrap();
        let structure = Arc::new(MockStructure::failing(stage));
        let composer = Arc::new(MockComposer::new());

        let err = pipeline(&structure, &composer, temp_dir.path(), PipelineVariant::Full)
            .run(Topic::new("Doomed").unwrap())
            .await
            .unwrap_err();

        assert!(err.is_transient(), "{:?}: {}", stage, err);
        let calls = [
            structure.generate_calls.load(Ordering::SeqCst),
            structure.review_calls.load(Ordering::SeqCst),
            structure.revise_calls.load(Ordering::SeqCst),
        ];
        assert_eq!(calls, expected_calls, "{:?}", stage);
        assert_eq!(composer.calls(), 0, "{:?}", stage);

        let dir = PresentationDir::new(temp_dir.path().join("doomed"));
        assert!(!dir.structure_path().exists(), "{:?}", stage);
        assert!(!dir.deck_path().exists(), "{:?}", stage);
    }
}
