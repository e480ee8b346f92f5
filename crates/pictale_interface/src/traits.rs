//! Trait definitions for model backends.

use async_trait::async_trait;
use pictale_core::{AudioArtifact, GenerateRequest, GenerateResponse, ImageReference, Scenario};
use pictale_error::PictaleResult;

/// Image-to-text model producing a scenario from an image.
#[async_trait]
pub trait Captioner: Send + Sync {
    /// Caption an image, returning the first candidate only.
    ///
    /// Fails with `InputError` if the image cannot be read and with
    /// `ModelUnavailableError` if the model cannot be run.
    async fn caption(&self, image: &ImageReference) -> PictaleResult<Scenario>;

    /// Model identifier (e.g., "nlpconnect/vit-gpt2-image-captioning").
    fn model_name(&self) -> &str;
}

/// Conversational language model.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a single completion for the request.
    async fn generate(&self, req: &GenerateRequest) -> PictaleResult<GenerateResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;
}

/// Text-to-speech model.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text`, returning the encoded audio payload.
    async fn synthesize(&self, text: &str) -> PictaleResult<AudioArtifact>;

    /// Endpoint or model identifier.
    fn model_name(&self) -> &str;
}
