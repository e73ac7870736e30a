//! Narration through a text-to-speech driver.

use async_trait::async_trait;
use presenter_error::{PresenterResult, StorageError, StorageErrorKind};
use presenter_interface::{Narrator, SpeechDriver};
use std::path::Path;
use tracing::{debug, instrument};

/// Adapts a [`SpeechDriver`] into a [`Narrator`] writing audio files.
#[derive(Debug, Clone)]
pub struct SpeechNarrator<S> {
    speech: S,
}

impl<S: SpeechDriver> SpeechNarrator<S> {
    /// Narrator speaking through `speech`.
    pub fn new(speech: S) -> Self {
        Self { speech }
    }
}

#[async_trait]
impl<S: SpeechDriver> Narrator for SpeechNarrator<S> {
    #[instrument(skip(self, script), fields(voice = %self.speech.voice(), audio = %audio_path.display()))]
    async fn narrate(&self, script: &str, audio_path: &Path) -> PresenterResult<()> {
        let audio = self.speech.synthesize(script).await?;

        if let Some(parent) = audio_path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        tokio::fs::write(audio_path, &audio).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                audio_path.display(),
                e
            )))
        })?;

        debug!(bytes = audio.len(), "Wrote narration audio");
        Ok(())
    }
}
