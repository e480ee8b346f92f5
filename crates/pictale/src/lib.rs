//! Pictale turns a photo into a narrated micro-story.
//!
//! An image is captioned by a hosted image-to-text model, the caption is
//! expanded into a short story by a language model, and the story is read
//! aloud by a hosted text-to-speech model. The resulting audio is stored
//! per run.
//!
//! This crate re-exports the workspace crates and provides the HTTP upload
//! API and logging setup used by the `pictale` binary.
//!
//! # Example
//!
//! ```no_run
//! use pictale::{Credentials, ImageReference, PictaleConfig, StoryPipeline};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PictaleConfig::load()?;
//! let credentials = Credentials::from_env();
//! credentials.validate()?;
//!
//! let pipeline = StoryPipeline::from_config(&config, &credentials)?;
//! let run = pipeline.run(ImageReference::from_path("cat.jpg")).await?;
//!
//! println!("Scenario: {}", run.scenario());
//! println!("Story: {}", run.story());
//! println!("Audio: {}", run.audio().path().display());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod observability;
pub mod server;

pub use pictale_config::{
    CaptionerConfig, Credentials, NarratorConfig, PictaleConfig, ServerSettings, StorageConfig,
    StorytellerConfig,
};
pub use pictale_core::{
    AudioArtifact, AudioArtifactRef, GenerateRequest, GenerateResponse, ImageReference, Message,
    PipelineStage, Role, RunId, Scenario, Story, StoryPrompt, StoryRun, is_jpeg,
};
pub use pictale_error::{ConfigError, PictaleError, PictaleErrorKind, PictaleResult};
pub use pictale_interface::{Captioner, SpeechSynthesizer, TextGenerator};
pub use pictale_models::{
    HuggingFaceCaptioner, HuggingFaceSpeechClient, OpenAiChatClient, StageMetrics,
};
pub use pictale_pipeline::{Narrator, StoryPipeline, Storyteller};
pub use pictale_storage::ArtifactStore;
