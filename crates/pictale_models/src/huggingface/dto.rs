//! Hugging Face inference API data transfer objects.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One candidate from an image-to-text response.
///
/// The endpoint answers with a JSON list of these, best first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct CaptionCandidate {
    /// Caption text
    generated_text: String,
}

impl CaptionCandidate {
    /// Wrap caption text.
    pub fn new(generated_text: impl Into<String>) -> Self {
        Self {
            generated_text: generated_text.into(),
        }
    }
}

/// Text-to-speech request body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct SpeechRequest {
    /// Text to synthesize
    inputs: String,
}

impl SpeechRequest {
    /// Request synthesis of `inputs`.
    pub fn new(inputs: impl Into<String>) -> Self {
        Self {
            inputs: inputs.into(),
        }
    }
}
