//! Configuration for Presenter runs.
//!
//! Configuration is layered, later sources overriding earlier ones:
//! 1. Bundled defaults (include_str! from presenter.toml)
//! 2. `~/.config/presenter/presenter.toml`
//! 3. `./presenter.toml`
//! 4. An explicit file passed by the caller
//! 5. `PRESENTER_<SECTION>__<KEY>` environment variables

use crate::engine::RetryPolicy;
use config::{Config, Environment, File, FileFormat};
use presenter_error::{ConfigError, PresenterError, PresenterResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

/// Which terminal result a presentation run produces.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PipelineVariant {
    /// Stop after the structure is finalized
    StructureOnly,
    /// Compose every slide and assemble the deck
    #[default]
    Full,
}

/// Constant-delay retry settings for one stage.
///
/// ```toml
/// [video.narration_retry]
/// max_attempts = 3
/// delay_ms = 5000
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total attempts including the first
    pub max_attempts: usize,
    /// Pause between attempts
    pub delay_ms: u64,
}

impl RetryConfig {
    /// Engine policy for these settings.
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy::constant(self.max_attempts, Duration::from_millis(self.delay_ms))
    }
}

/// LLM provider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// API root of an OpenAI-compatible server
    pub base_url: String,
    /// Chat model identifier
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Response length cap
    pub max_tokens: Option<u32>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            temperature: Some(0.2),
            max_tokens: None,
        }
    }
}

/// Text-to-speech settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// API root of an OpenAI-compatible server
    pub base_url: String,
    /// Speech model identifier
    pub model: String,
    /// Voice identifier
    pub voice: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "tts-1".to_string(),
            voice: "alloy".to_string(),
        }
    }
}

/// Presentation pipeline settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Terminal result of a run
    pub variant: PipelineVariant,
    /// Parent of every per-topic presentation directory
    pub output_root: PathBuf,
    /// Deadline for a whole run
    pub timeout_secs: u64,
    /// Slides composed concurrently
    pub compose_workers: usize,
    /// Retry applied to each slide composition
    pub compose_retry: RetryConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            variant: PipelineVariant::Full,
            output_root: PathBuf::from("."),
            timeout_secs: 240,
            compose_workers: 6,
            compose_retry: RetryConfig {
                max_attempts: 1,
                delay_ms: 5000,
            },
        }
    }
}

impl PipelineConfig {
    /// Run deadline as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Video pipeline settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    /// Deadline for a whole video run
    pub timeout_secs: u64,
    /// Narrations synthesized concurrently
    pub narration_workers: usize,
    /// Clips rendered concurrently
    pub clip_workers: usize,
    /// Retry applied to each narration
    pub narration_retry: RetryConfig,
    /// ffmpeg xfade transition name
    pub transition: String,
    /// Crossfade length in seconds
    pub transition_secs: f64,
    /// Final video file name inside the presentation directory
    pub output_file: String,
    /// ffmpeg executable
    pub ffmpeg: String,
    /// ffprobe executable
    pub ffprobe: String,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 1800,
            narration_workers: 5,
            clip_workers: 6,
            narration_retry: RetryConfig {
                max_attempts: 3,
                delay_ms: 5000,
            },
            transition: "slideleft".to_string(),
            transition_secs: 1.0,
            output_file: "presentation.mp4".to_string(),
            ffmpeg: "ffmpeg".to_string(),
            ffprobe: "ffprobe".to_string(),
        }
    }
}

impl VideoConfig {
    /// Run deadline as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Top-level Presenter configuration.
///
/// # Example
///
/// ```no_run
/// use presenter_workflow::PresenterConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PresenterConfig::load(None)?;
/// println!("Composing with {} workers", config.pipeline.compose_workers);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenterConfig {
    /// LLM provider
    pub llm: LlmConfig,
    /// Speech provider
    pub speech: SpeechConfig,
    /// Presentation pipeline
    pub pipeline: PipelineConfig,
    /// Video pipeline
    pub video: VideoConfig,
}

impl PresenterConfig {
    /// Load configuration from a specific file path only.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> PresenterResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                PresenterError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                PresenterError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load layered configuration, with `explicit` as the highest file precedence.
    ///
    /// User config files are optional and silently skipped if absent. An
    /// explicit file must exist.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> PresenterResult<Self> {
        debug!("Loading configuration with precedence: env > explicit > current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../presenter.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/presenter/presenter.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("presenter").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PRESENTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder
            .build()
            .map_err(|e| {
                PresenterError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                PresenterError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the engine cannot run with.
    pub fn validate(&self) -> PresenterResult<()> {
        let checks = [
            (self.pipeline.compose_workers == 0, "pipeline.compose_workers", "must be at least 1"),
            (self.video.narration_workers == 0, "video.narration_workers", "must be at least 1"),
            (self.video.clip_workers == 0, "video.clip_workers", "must be at least 1"),
            (
                self.pipeline.compose_retry.max_attempts == 0,
                "pipeline.compose_retry.max_attempts",
                "must be at least 1",
            ),
            (
                self.video.narration_retry.max_attempts == 0,
                "video.narration_retry.max_attempts",
                "must be at least 1",
            ),
            (self.pipeline.timeout_secs == 0, "pipeline.timeout_secs", "must be positive"),
            (self.video.timeout_secs == 0, "video.timeout_secs", "must be positive"),
            (
                self.video.transition_secs.is_nan() || self.video.transition_secs < 0.0,
                "video.transition_secs",
                "must not be negative",
            ),
        ];

        match checks.iter().find(|(failed, _, _)| *failed) {
            Some((_, setting, reason)) => Err(ConfigError::invalid(*setting, reason).into()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_defaults_match_default_impl() {
        let bundled: PresenterConfig = Config::builder()
            .add_source(File::from_str(
                include_str!("../../../presenter.toml"),
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(bundled, PresenterConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "[pipeline]\nvariant = \"structure_only\"\ncompose_workers = 2\n",
        )
        .unwrap();

        let config = PresenterConfig::from_file(&path).unwrap();
        assert_eq!(config.pipeline.variant, PipelineVariant::StructureOnly);
        assert_eq!(config.pipeline.compose_workers, 2);
        assert_eq!(config.pipeline.timeout_secs, 240);
        assert_eq!(config.video.narration_workers, 5);
    }

    #[test]
    fn test_zero_workers_rejected() {
        let mut config = PresenterConfig::default();
        config.video.narration_workers = 0;
        let err = config.validate().unwrap_err();
        assert!(format!("{}", err).contains("narration_workers"));
        match err.kind() {
            presenter_error::PresenterErrorKind::Config(e) => {
                assert_eq!(e.setting.as_deref(), Some("video.narration_workers"))
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_zero_video_timeout_rejected() {
        let mut config = PresenterConfig::default();
        config.video.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(format!("{}", err).contains("video.timeout_secs"));
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(PipelineVariant::StructureOnly.to_string(), "structure_only");
    }
}
