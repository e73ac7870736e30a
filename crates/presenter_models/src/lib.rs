//! LLM and speech provider integrations for Presenter.
//!
//! Both drivers speak the OpenAI HTTP API, so any compatible endpoint (OpenAI,
//! a local proxy, a self-hosted server) works by changing the base URL.
//!
//! ```no_run
//! use presenter_core::{GenerateRequest, Message};
//! use presenter_interface::LlmDriver;
//! use presenter_models::OpenAiDriver;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let driver = OpenAiDriver::from_env("OPENAI_API_KEY", "gpt-4o-mini")?;
//! let request = GenerateRequest {
//!     messages: vec![Message::user("Hello")],
//!     ..Default::default()
//! };
//! let response = driver.generate(&request).await?;
//! println!("{}", response.text);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chat;
mod dto;
mod http;
mod speech;

pub use chat::OpenAiDriver;
pub use dto::{
    ChatChoice, ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse,
    ChatMessage, ResponseFormat, SpeechRequest, SpeechRequestBuilder,
};
pub use http::classify_status;
pub use speech::OpenAiSpeech;

/// Default OpenAI API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
