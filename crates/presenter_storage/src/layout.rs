//! File names inside a presentation directory.

/// Plan snapshot read by the video stage.
pub const STRUCTURE_FILE: &str = "structure.json";
/// Assembled markdown deck.
pub const DECK_FILE: &str = "presentation.md";
/// Per-slide markdown content.
pub const CONTENT_FILE: &str = "content.md";
/// Per-slide narration script.
pub const NARRATION_FILE: &str = "narration.txt";
/// Per-slide synthesized narration audio.
pub const AUDIO_FILE: &str = "narration.mp3";
/// Per-slide narration audio while the narrator is still writing it.
pub const AUDIO_STAGING_FILE: &str = "narration.partial.mp3";
/// Per-slide still image, rendered outside this tool.
pub const IMAGE_FILE: &str = "slide.png";
/// Per-slide video clip.
pub const CLIP_FILE: &str = "clip.mp4";
