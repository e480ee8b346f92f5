//! Hosted model clients for the Pictale pipeline.
//!
//! Each client implements one of the seams in `pictale_interface`:
//!
//! - [`HuggingFaceCaptioner`] - image-to-text over the Hugging Face inference API
//! - [`OpenAiChatClient`] - chat completions against an OpenAI-compatible API
//! - [`HuggingFaceSpeechClient`] - text-to-speech over the Hugging Face inference API
//!
//! Clients are built once from configuration and credentials and shared
//! across runs. A missing credential is reported as an `AuthenticationError`
//! when a request is attempted, before anything goes over the network.
//!
//! # Example
//!
//! ```no_run
//! use pictale_config::{Credentials, PictaleConfig};
//! use pictale_core::ImageReference;
//! use pictale_interface::Captioner;
//! use pictale_models::HuggingFaceCaptioner;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PictaleConfig::load()?;
//! let credentials = Credentials::from_env();
//! let captioner = HuggingFaceCaptioner::new(&config.captioner, &credentials)?;
//! let scenario = captioner.caption(&ImageReference::from_path("cat.jpg")).await?;
//! println!("{}", scenario);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod http;
mod huggingface;
mod metrics;
mod openai;

pub use huggingface::{
    CaptionCandidate, HuggingFaceCaptioner, HuggingFaceSpeechClient, SpeechRequest,
};
pub use metrics::{StageMetrics, classify_error};
pub use openai::{
    ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse, ChatMessage,
    Choice, OpenAiChatClient, Usage,
};
