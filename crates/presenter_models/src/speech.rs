//! OpenAI-compatible text-to-speech driver.

use crate::dto::SpeechRequest;
use crate::http::{api_key_from_env, send_checked};
use crate::DEFAULT_BASE_URL;
use async_trait::async_trait;
use presenter_error::{LlmError, LlmErrorKind, PresenterResult};
use presenter_interface::SpeechDriver;
use reqwest::Client;
use tracing::{debug, instrument};

/// Speech synthesis over the `/audio/speech` endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiSpeech {
    client: Client,
    api_key: String,
    model: String,
    voice: String,
    base_url: String,
}

impl OpenAiSpeech {
    /// Creates a speech driver reading its API key from `key_var`.
    ///
    /// # Errors
    ///
    /// Returns error if the variable is not set.
    pub fn from_env(
        key_var: &str,
        model: impl Into<String>,
        voice: impl Into<String>,
    ) -> PresenterResult<Self> {
        let api_key = api_key_from_env(key_var)?;
        Ok(Self {
            client: Client::new(),
            api_key,
            model: model.into(),
            voice: voice.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the driver at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl SpeechDriver for OpenAiSpeech {
    #[instrument(skip(self, text), fields(model = %self.model, voice = %self.voice, chars = text.len()))]
    async fn synthesize(&self, text: &str) -> PresenterResult<Vec<u8>> {
        let body = SpeechRequest::builder()
            .model(self.model.clone())
            .input(text)
            .voice(self.voice.clone())
            .build()
            .map_err(|e| LlmError::new(LlmErrorKind::ResponseParsing(e.to_string())))?;

        let response = send_checked(
            self.client
                .post(format!("{}/audio/speech", self.base_url))
                .bearer_auth(&self.api_key)
                .json(&body),
        )
        .await?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| LlmError::new(LlmErrorKind::Transport(e.to_string())))?;

        debug!(bytes = bytes.len(), "Received synthesized audio");
        Ok(bytes.to_vec())
    }

    fn voice(&self) -> &str {
        &self.voice
    }
}
