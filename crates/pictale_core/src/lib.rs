//! Core data types for the Pictale pipeline.
//!
//! This crate provides the values that flow between pipeline stages:
//! an [`ImageReference`] is captioned into a [`Scenario`], the scenario is
//! told as a [`Story`], and the story is narrated into an [`AudioArtifact`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod audio;
mod image;
mod prompt;
mod request;
mod run;
mod stage;
mod text;

pub use audio::{AudioArtifact, AudioArtifactRef, FALLBACK_AUDIO_TYPE, sniff_audio_type};
pub use image::{ImageReference, is_jpeg};
pub use prompt::{DEFAULT_MAX_WORDS, StoryPrompt};
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateResponse, Message, MessageBuilder, Role,
};
pub use run::{RunId, StoryRun};
pub use stage::PipelineStage;
pub use text::{Scenario, Story, word_count};
