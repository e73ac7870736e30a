//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Presenter - turn a topic into a slide deck and a narrated video
#[derive(Parser, Debug)]
#[command(name = "presenter")]
#[command(about = "Turn a topic into a slide deck and a narrated video", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subject of the presentation
    pub topic: String,

    /// Stop after the structure is finalized
    #[arg(long)]
    pub structure_only: bool,

    /// Narrate the slides and assemble a video afterwards
    #[arg(long, conflicts_with = "structure_only")]
    pub video: bool,

    /// Configuration file layered over the defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding per-topic presentation folders
    #[arg(long)]
    pub output_root: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_video_conflicts_with_structure_only() {
        let result = Cli::try_parse_from(["presenter", "Rust", "--video", "--structure-only"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_topic_and_flags() {
        let cli = Cli::try_parse_from(["presenter", "Async Rust", "--video", "-v"]).unwrap();
        assert_eq!(cli.topic, "Async Rust");
        assert!(cli.video);
        assert!(cli.verbose);
        assert!(cli.config.is_none());
    }
}
