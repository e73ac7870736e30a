//! Slide markdown cleanup and deck assembly.

use presenter_core::ComposedSlide;
use regex::Regex;
use std::sync::LazyLock;

/// Deck header understood by the slide renderer.
pub const PRESENTATION_CONFIG: &str = "[comment]: # (CODE_THEME = base16/zenburn)\n\
[comment]: # (controls: true)\n\
[comment]: # (keyboard: true)\n";

/// Marker between two slides in the assembled deck.
pub const SLIDE_SEPARATOR: &str = "[comment]: # (!!!)";

static TOP_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,2}[ \t]+").expect("Valid heading regex"));

static LOCAL_PNG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[[^\]]+\]\(\./([^)]*?\.png)\)").expect("Valid image link regex")
});

/// Normalize LLM-written slide markdown for the deck renderer.
///
/// - lines containing `Note over` are dropped from mermaid blocks
/// - `#` and `##` headings become `###`
/// - local png links point into `./media/`
/// - `flowchart TD` becomes `flowchart LR`
///
/// ```
/// use presenter_workflow::sanitize_markdown;
///
/// let clean = sanitize_markdown("# Title\n![chart](./flow.png)");
/// assert_eq!(clean, "### Title\n![diagram](./media/flow.png)\n\n");
/// ```
pub fn sanitize_markdown(content: &str) -> String {
    let without_notes = strip_mermaid_notes(content);
    let headings = TOP_HEADING.replace_all(&without_notes, "### ");
    let images = LOCAL_PNG.replace_all(&headings, "![diagram](./media/${1})");
    let mut out = images.replace("flowchart TD", "flowchart LR");
    out.push_str("\n\n");
    out
}

fn strip_mermaid_notes(content: &str) -> String {
    let mut in_mermaid = false;
    let mut kept = Vec::new();

    for line in content.lines() {
        let fence = line.trim_start();
        if fence.starts_with("```") {
            in_mermaid = !in_mermaid && fence.trim_start_matches('`').trim() == "mermaid";
        } else if in_mermaid && line.contains("Note over") {
            continue;
        }
        kept.push(line);
    }

    kept.join("\n")
}

/// Full deck text: config header, then every slide sanitized and separated.
pub fn assemble_deck(slides: &[ComposedSlide]) -> String {
    let body = slides
        .iter()
        .map(|slide| sanitize_markdown(slide.content()))
        .collect::<Vec<_>>()
        .join(&format!("{}\n", SLIDE_SEPARATOR));

    format!("{}\n{}", PRESENTATION_CONFIG, body)
}
