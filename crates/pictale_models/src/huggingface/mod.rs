//! Hugging Face inference API clients.

mod captioner;
mod dto;
mod speech;

pub use captioner::HuggingFaceCaptioner;
pub use dto::{CaptionCandidate, SpeechRequest};
pub use speech::HuggingFaceSpeechClient;
