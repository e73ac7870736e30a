//! Tests for the presentation data model.

use presenter_core::{
    ComposedSlide, NeighborContext, PresentationPlan, ReviewVerdict, SlideDraft, SlideSpec, Topic,
};

fn three_slides() -> PresentationPlan {
    PresentationPlan::new(vec![
        SlideSpec::new("Stack", "Fixed-size values live on the stack"),
        SlideSpec::new("Heap", "Growable data lives on the heap"),
        SlideSpec::new("Drop", "Owners free their heap data"),
    ])
}

#[test]
fn test_topic_folder_name_is_path_safe() {
    let topic = Topic::new(" TCP/IP Basics ").unwrap();
    assert_eq!(topic.folder_name(), "tcp_ip_basics");
}

#[test]
fn test_dot_topics_stay_inside_output_root() {
    assert_eq!(Topic::new("..").unwrap().folder_name(), "__");
    assert_eq!(Topic::new(" . ").unwrap().folder_name(), "_");
    assert_eq!(Topic::new("../etc").unwrap().folder_name(), ".._etc");
    assert_eq!(Topic::new("Rust 2.0").unwrap().folder_name(), "rust_2.0");
}

#[test]
fn test_neighbor_context_at_boundaries() {
    let plan = three_slides();

    let first = NeighborContext::for_index(&plan, 0);
    assert_eq!(first.previous(), "");
    assert_eq!(first.next(), "Heap: Growable data lives on the heap");

    let last = NeighborContext::for_index(&plan, 2);
    assert_eq!(last.previous(), "Heap: Growable data lives on the heap");
    assert_eq!(last.next(), "");
}

#[test]
fn test_single_slide_has_no_neighbors() {
    let plan = PresentationPlan::new(vec![SlideSpec::new("Only", "Everything at once")]);
    assert_eq!(NeighborContext::for_index(&plan, 0), NeighborContext::default());
}

#[test]
fn test_plan_json_shape() {
    let plan = three_slides();
    let json = serde_json::to_value(&plan).unwrap();

    assert_eq!(json["slides"][1]["title"], "Heap");
    assert_eq!(
        json["slides"][2]["atomic_core_idea"],
        "Owners free their heap data"
    );

    let back: PresentationPlan = serde_json::from_value(json).unwrap();
    assert_eq!(back, plan);
}

#[test]
fn test_rejected_verdict_keeps_feedback() {
    let verdict: ReviewVerdict =
        serde_json::from_str(r#"{"accepted": false, "feedback": "Merge slides 2 and 3"}"#)
            .unwrap();
    assert!(!verdict.is_accepted());
    assert_eq!(verdict.feedback(), Some("Merge slides 2 and 3"));
}

#[test]
fn test_accepted_verdict_drops_blank_feedback() {
    let verdict: ReviewVerdict =
        serde_json::from_str(r#"{"is_perfect": true, "feedback": "  "}"#).unwrap();
    assert!(verdict.is_accepted());
    assert_eq!(verdict.feedback(), None);
}

#[test]
fn test_composed_slide_from_draft() {
    let slide = ComposedSlide::from_draft(4, SlideDraft::new("### Drop", "When owners leave scope"));
    assert_eq!(*slide.index(), 4);
    assert_eq!(slide.content(), "### Drop");
    assert_eq!(slide.narration(), "When owners leave scope");
}
