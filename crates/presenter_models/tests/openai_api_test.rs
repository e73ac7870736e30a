//! Live API tests. Run with `--features api` and `OPENAI_API_KEY` set.

#![cfg(feature = "api")]

use presenter_core::{GenerateRequest, Message};
use presenter_interface::{LlmDriver, SpeechDriver};
use presenter_models::{OpenAiDriver, OpenAiSpeech};

#[tokio::test]
async fn test_chat_completion_json_mode() {
    let _ = dotenvy::dotenv();
    let driver = OpenAiDriver::from_env("OPENAI_API_KEY", "gpt-4o-mini").unwrap();

    let request = GenerateRequest {
        messages: vec![Message::user(
            "Reply with a JSON object with a single key \"ok\" set to true.",
        )],
        json_output: true,
        max_tokens: Some(20),
        ..Default::default()
    };

    let response = driver.generate(&request).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&response.text).unwrap();
    assert_eq!(value["ok"], true);
}

#[tokio::test]
async fn test_speech_synthesis_returns_audio() {
    let _ = dotenvy::dotenv();
    let speech = OpenAiSpeech::from_env("OPENAI_API_KEY", "tts-1", "alloy").unwrap();

    let audio = speech.synthesize("Testing one two three.").await.unwrap();
    assert!(!audio.is_empty());
}
