//! OpenAI API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use presenter_core::{Message, Role};
use serde::{Deserialize, Serialize};

/// Chat message on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatMessage {
    /// Message role
    role: Role,
    /// Message content
    content: String,
}

impl From<&Message> for ChatMessage {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role,
            content: message.content.clone(),
        }
    }
}

/// Output format constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseFormat {
    /// Format type, `json_object` or `text`
    #[serde(rename = "type")]
    pub kind: String,
}

impl ResponseFormat {
    /// Constrain output to a single JSON object.
    pub fn json_object() -> Self {
        Self {
            kind: "json_object".to_string(),
        }
    }
}

/// Chat completions request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatCompletionRequest {
    /// Model identifier
    model: String,
    /// Conversation messages
    messages: Vec<ChatMessage>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Maximum tokens to generate
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Output format constraint
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

impl ChatCompletionRequest {
    /// Creates a new builder for `ChatCompletionRequest`.
    pub fn builder() -> ChatCompletionRequestBuilder {
        ChatCompletionRequestBuilder::default()
    }
}

/// One completion alternative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatChoice {
    /// Generated message
    message: ChatMessage,
}

/// Chat completions response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatCompletionResponse {
    /// Completion alternatives, first one is used
    choices: Vec<ChatChoice>,
}

/// Text-to-speech request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct SpeechRequest {
    /// Speech model
    model: String,
    /// Text to speak
    input: String,
    /// Voice identifier
    voice: String,
    /// Audio container format
    #[builder(default = "\"mp3\".to_string()")]
    response_format: String,
}

impl SpeechRequest {
    /// Creates a new builder for `SpeechRequest`.
    pub fn builder() -> SpeechRequestBuilder {
        SpeechRequestBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_omits_unset_options() {
        let request = ChatCompletionRequest::builder()
            .model("gpt-4o-mini")
            .messages(vec![ChatMessage::from(&Message::user("hi"))])
            .build()
            .unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "user");
        assert!(json.get("temperature").is_none());
        assert!(json.get("response_format").is_none());
    }

    #[test]
    fn test_chat_request_json_mode() {
        let request = ChatCompletionRequest::builder()
            .model("gpt-4o-mini")
            .messages(Vec::<ChatMessage>::new())
            .response_format(Some(ResponseFormat::json_object()))
            .build()
            .unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["response_format"]["type"], "json_object");
    }

    #[test]
    fn test_parse_chat_response() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "{}"}}]
        }"#;
        let response: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices()[0].message().content(), "{}");
    }

    #[test]
    fn test_speech_request_defaults_to_mp3() {
        let request = SpeechRequest::builder()
            .model("tts-1")
            .input("Hello")
            .voice("alloy")
            .build()
            .unwrap();
        assert_eq!(request.response_format(), "mp3");
    }
}
