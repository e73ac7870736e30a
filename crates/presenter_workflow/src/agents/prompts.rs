//! Prompt text for the LLM-backed collaborators.

use presenter_core::{NeighborContext, PresentationPlan, ReviewVerdict, SlideSpec, Topic};

pub(crate) const STRUCTURE_SYSTEM: &str = "You are an expert presentation designer. \
You break a topic into a sequence of slides, each carrying exactly one atomic core idea \
that a speaker can narrate in 40 to 50 seconds. Respond with JSON only.";

pub(crate) const STRUCTURE_SCHEMA: &str = r#"{"slides": [{"title": "string", "atomic_core_idea": "string"}]}"#;

pub(crate) const REVIEW_SCHEMA: &str = r#"{"accepted": true | false, "feedback": "string or null"}"#;

pub(crate) const SLIDE_SYSTEM: &str = "You write single presentation slides in markdown and \
the words a speaker says over them. Slides are concise: a heading, a few bullets, and a \
mermaid diagram or code block only when it clarifies the idea. Respond with JSON only.";

pub(crate) const SLIDE_SCHEMA: &str = r#"{"content": "markdown for the slide", "narration": "plain text the speaker reads, 40 to 50 seconds"}"#;

pub(crate) fn create_structure(topic: &Topic) -> String {
    format!(
        "Plan a presentation on the topic: {topic}\n\n\
         Order the slides so each builds on the previous one.\n\
         Output ONLY valid JSON matching: {STRUCTURE_SCHEMA}"
    )
}

pub(crate) fn review_structure(topic: &Topic, plan: &PresentationPlan) -> String {
    format!(
        "Topic: {topic}\n\nProposed slides:\n{}\n\n\
         Accept the plan only if every slide holds a single atomic core idea that can be \
         narrated in 40 to 50 seconds. Otherwise reject it and say which slides to split, \
         merge, or reorder, and how.\n\
         Output ONLY valid JSON matching: {REVIEW_SCHEMA}",
        numbered(plan)
    )
}

pub(crate) fn revise_structure(
    topic: &Topic,
    plan: &PresentationPlan,
    verdict: &ReviewVerdict,
) -> String {
    format!(
        "Topic: {topic}\n\nCurrent slides:\n{}\n\nReviewer feedback:\n{}\n\n\
         Rewrite the full slide list so the feedback is addressed.\n\
         Output ONLY valid JSON matching: {STRUCTURE_SCHEMA}",
        numbered(plan),
        verdict.feedback().unwrap_or("No feedback given.")
    )
}

pub(crate) fn compose_slide(topic: &Topic, slide: &SlideSpec, neighbors: &NeighborContext) -> String {
    let previous = or_none(neighbors.previous());
    let next = or_none(neighbors.next());
    format!(
        "Presentation topic: {topic}\n\
         Previous slide: {previous}\n\
         Next slide: {next}\n\n\
         Write the slide titled \"{}\" conveying: {}\n\
         Do not repeat the neighboring slides.\n\
         Output ONLY valid JSON matching: {SLIDE_SCHEMA}",
        slide.title(),
        slide.atomic_core_idea()
    )
}

fn numbered(plan: &PresentationPlan) -> String {
    plan.slides()
        .iter()
        .enumerate()
        .map(|(i, slide)| format!("{}. {}", i + 1, slide.summary()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn or_none(summary: &str) -> &str {
    if summary.is_empty() { "(none)" } else { summary }
}
