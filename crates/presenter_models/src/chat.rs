//! OpenAI-compatible chat completions driver.

use crate::dto::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ResponseFormat};
use crate::http::{api_key_from_env, send_checked};
use crate::DEFAULT_BASE_URL;
use async_trait::async_trait;
use presenter_core::{GenerateRequest, GenerateResponse};
use presenter_error::{LlmError, LlmErrorKind, PresenterResult};
use presenter_interface::LlmDriver;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Chat completions driver for OpenAI and compatible servers.
#[derive(Debug, Clone)]
pub struct OpenAiDriver {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiDriver {
    /// Creates a driver reading its API key from the environment variable `key_var`.
    ///
    /// # Errors
    ///
    /// Returns error if the variable is not set.
    #[instrument(skip_all, fields(model = %model.as_ref()))]
    pub fn from_env(key_var: &str, model: impl AsRef<str>) -> PresenterResult<Self> {
        let api_key = api_key_from_env(key_var)?;
        Ok(Self::with_api_key(api_key, model.as_ref()))
    }

    /// Creates a driver with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let model = model.into();
        debug!(model = %model, "Created OpenAI driver");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the driver at a different API root, e.g. a local proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn to_wire(&self, req: &GenerateRequest) -> PresenterResult<ChatCompletionRequest> {
        ChatCompletionRequest::builder()
            .model(req.model.clone().unwrap_or_else(|| self.model.clone()))
            .messages(req.messages.iter().map(ChatMessage::from).collect::<Vec<_>>())
            .temperature(req.temperature)
            .max_tokens(req.max_tokens)
            .response_format(req.json_output.then(ResponseFormat::json_object))
            .build()
            .map_err(|e| {
                LlmError::new(LlmErrorKind::ResponseParsing(format!(
                    "Failed to build request: {}",
                    e
                )))
                .into()
            })
    }
}

#[async_trait]
impl LlmDriver for OpenAiDriver {
    #[instrument(skip(self, req), fields(provider = "openai", model = %self.model, messages = req.messages.len()))]
    async fn generate(&self, req: &GenerateRequest) -> PresenterResult<GenerateResponse> {
        let body = self.to_wire(req)?;
        let url = format!("{}/chat/completions", self.base_url);

        debug!(url = %url, "Sending chat completion request");

        let response = send_checked(
            self.client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&body),
        )
        .await?;

        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse chat completion");
            LlmError::new(LlmErrorKind::ResponseParsing(e.to_string()))
        })?;

        let text = parsed
            .choices()
            .first()
            .map(|choice| choice.message().content().clone())
            .ok_or_else(|| {
                LlmError::new(LlmErrorKind::ResponseParsing(
                    "Response contained no choices".to_string(),
                ))
            })?;

        debug!(response_len = text.len(), "Received chat completion");
        Ok(GenerateResponse::new(text))
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use presenter_core::Message;

    #[test]
    fn test_request_model_override() {
        let driver = OpenAiDriver::with_api_key("key", "gpt-4o-mini");
        let req = GenerateRequest {
            messages: vec![Message::user("hi")],
            model: Some("gpt-4o".to_string()),
            json_output: true,
            ..Default::default()
        };

        let wire = driver.to_wire(&req).unwrap();
        assert_eq!(wire.model(), "gpt-4o");
        assert_eq!(wire.response_format(), &Some(ResponseFormat::json_object()));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let driver =
            OpenAiDriver::with_api_key("key", "m").with_base_url("http://localhost:8080/v1/");
        assert_eq!(driver.base_url, "http://localhost:8080/v1");
    }
}
