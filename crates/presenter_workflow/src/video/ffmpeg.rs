//! ffmpeg invocation builder for the final crossfaded video.

use presenter_error::{PresenterResult, VideoError, VideoErrorKind};
use presenter_interface::RenderedClip;
use std::fmt;
use std::path::Path;

/// Transition applied between every pair of consecutive clips.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    kind: String,
    duration_secs: f64,
}

impl Transition {
    /// An `xfade` transition named `kind` lasting `duration_secs`.
    pub fn new(kind: impl Into<String>, duration_secs: f64) -> Self {
        Self {
            kind: kind.into(),
            duration_secs: duration_secs.max(0.0),
        }
    }

    /// ffmpeg xfade transition name.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Overlap between two clips.
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new("slideleft", 1.0)
    }
}

/// A complete ffmpeg command line.
///
/// # Example
///
/// ```
/// use presenter_interface::RenderedClip;
/// use presenter_workflow::video::{FfmpegCommand, Transition};
/// use std::path::Path;
///
/// let clips = vec![
///     RenderedClip::new("slide_0/clip.mp4", 5.0),
///     RenderedClip::new("slide_1/clip.mp4", 4.0),
/// ];
/// let command =
///     FfmpegCommand::crossfade("ffmpeg", &clips, &Transition::default(), Path::new("out.mp4"))
///         .unwrap();
/// assert!(command.to_string().contains("offset=4.000"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfmpegCommand {
    program: String,
    args: Vec<String>,
}

impl FfmpegCommand {
    /// Join `clips` in order, crossfading video and audio at each boundary.
    ///
    /// The transition into clip `i + 1` starts at the summed length of clips
    /// `0..=i` minus `i + 1` transition lengths, never below zero. One clip is
    /// copied through unfiltered.
    ///
    /// # Errors
    ///
    /// Returns `NoClips` when `clips` is empty.
    pub fn crossfade(
        program: impl Into<String>,
        clips: &[RenderedClip],
        transition: &Transition,
        output: &Path,
    ) -> PresenterResult<Self> {
        if clips.is_empty() {
            return Err(VideoError::new(VideoErrorKind::NoClips).into());
        }

        let mut args = vec!["-y".to_string()];
        for clip in clips {
            args.push("-i".to_string());
            args.push(clip.path().display().to_string());
        }

        if clips.len() == 1 {
            args.extend(["-c".to_string(), "copy".to_string()]);
        } else {
            args.push("-filter_complex".to_string());
            args.push(filter_graph(clips, transition));
            args.extend(
                ["-map", "[vout]", "-map", "[aout]", "-c:v", "libx264", "-pix_fmt", "yuv420p", "-c:a", "aac"]
                    .map(String::from),
            );
        }
        args.push(output.display().to_string());

        Ok(Self {
            program: program.into(),
            args,
        })
    }

    /// Executable to run.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments, excluding the program.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for FfmpegCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

fn filter_graph(clips: &[RenderedClip], transition: &Transition) -> String {
    let d = transition.duration_secs();
    let last = clips.len() - 1;
    let mut filters = Vec::with_capacity(clips.len() * 4);

    for i in 0..clips.len() {
        filters.push(format!("[{i}:v:0]setpts=PTS-STARTPTS[v{i}]"));
        filters.push(format!("[{i}:a:0]asetpts=PTS-STARTPTS[a{i}]"));
    }

    let mut video_in = "v0".to_string();
    let mut audio_in = "a0".to_string();
    let mut elapsed = 0.0;

    for (i, clip) in clips[..last].iter().enumerate() {
        let next = i + 1;
        elapsed += clip.duration_secs();
        let offset = (elapsed - next as f64 * d).max(0.0);

        let (video_out, audio_out) = if next == last {
            ("vout".to_string(), "aout".to_string())
        } else {
            (format!("xv{next}"), format!("xa{next}"))
        };

        filters.push(format!(
            "[{video_in}][v{next}]xfade=transition={}:duration={d:.3}:offset={offset:.3}[{video_out}]",
            transition.kind()
        ));
        filters.push(format!("[{audio_in}][a{next}]acrossfade=d={d:.3}[{audio_out}]"));

        video_in = video_out;
        audio_in = audio_out;
    }

    filters.join(";")
}

fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=+,".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
