//! Collaborators backed by the ffmpeg and ffprobe executables.

use crate::video::{FfmpegCommand, Transition};
use async_trait::async_trait;
use presenter_error::{PresenterResult, VideoError, VideoErrorKind};
use presenter_interface::{ClipRenderer, RenderedClip, VideoEncoder};
use std::path::Path;
use std::process::Output;
use tokio::process::Command;
use tracing::{debug, instrument};

/// Run `program` to completion. A non-zero exit status is an error.
///
/// The child is killed if the returned future is dropped.
#[instrument(skip(args), fields(args = args.len()))]
pub async fn run_command(program: &str, args: &[String]) -> PresenterResult<Output> {
    let output = Command::new(program)
        .args(args)
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|e| {
            VideoError::new(VideoErrorKind::Spawn {
                program: program.to_string(),
                message: e.to_string(),
            })
        })?;

    if !output.status.success() {
        return Err(VideoError::new(VideoErrorKind::CommandFailed {
            program: program.to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
        .into());
    }

    debug!("Command finished");
    Ok(output)
}

/// Renders a still image plus narration into a clip with ffmpeg, then reads
/// the clip length back with ffprobe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfmpegClipRenderer {
    ffmpeg: String,
    ffprobe: String,
}

impl FfmpegClipRenderer {
    /// Renderer using the given executables.
    pub fn new(ffmpeg: impl Into<String>, ffprobe: impl Into<String>) -> Self {
        Self {
            ffmpeg: ffmpeg.into(),
            ffprobe: ffprobe.into(),
        }
    }

    async fn probe_duration(&self, clip: &Path) -> PresenterResult<f64> {
        let args = [
            "-v",
            "error",
            "-show_entries",
            "format=duration",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
        ]
        .map(String::from)
        .into_iter()
        .chain([clip.display().to_string()])
        .collect::<Vec<_>>();

        let output = run_command(&self.ffprobe, &args).await?;
        parse_duration(&String::from_utf8_lossy(&output.stdout))
    }
}

#[async_trait]
impl ClipRenderer for FfmpegClipRenderer {
    #[instrument(skip(self, image, audio, output), fields(output = %output.display()))]
    async fn render(
        &self,
        image: &Path,
        audio: &Path,
        output: &Path,
    ) -> PresenterResult<RenderedClip> {
        let args = vec![
            "-y".to_string(),
            "-loop".to_string(),
            "1".to_string(),
            "-i".to_string(),
            image.display().to_string(),
            "-i".to_string(),
            audio.display().to_string(),
            "-c:v".to_string(),
            "libx264".to_string(),
            "-tune".to_string(),
            "stillimage".to_string(),
            "-pix_fmt".to_string(),
            "yuv420p".to_string(),
            "-c:a".to_string(),
            "aac".to_string(),
            "-shortest".to_string(),
            output.display().to_string(),
        ];
        run_command(&self.ffmpeg, &args).await?;

        let duration = self.probe_duration(output).await?;
        Ok(RenderedClip::new(output, duration))
    }
}

/// Concatenates clips with crossfades using a single ffmpeg run.
#[derive(Debug, Clone, PartialEq)]
pub struct FfmpegEncoder {
    ffmpeg: String,
    transition: Transition,
}

impl FfmpegEncoder {
    /// Encoder using `ffmpeg` and `transition` at every boundary.
    pub fn new(ffmpeg: impl Into<String>, transition: Transition) -> Self {
        Self {
            ffmpeg: ffmpeg.into(),
            transition,
        }
    }
}

#[async_trait]
impl VideoEncoder for FfmpegEncoder {
    #[instrument(skip(self, clips, output), fields(clips = clips.len(), output = %output.display()))]
    async fn concatenate(&self, clips: &[RenderedClip], output: &Path) -> PresenterResult<()> {
        let command = FfmpegCommand::crossfade(&self.ffmpeg, clips, &self.transition, output)?;
        debug!(command = %command, "Assembling video");
        run_command(command.program(), command.args()).await?;
        Ok(())
    }
}

fn parse_duration(stdout: &str) -> PresenterResult<f64> {
    let trimmed = stdout.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite() && *d >= 0.0)
        .ok_or_else(|| VideoError::new(VideoErrorKind::Probe(trimmed.to_string())).into())
}
