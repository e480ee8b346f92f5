//! Trait interfaces for the models behind each Pictale stage.
//!
//! Each hosted model is reached through one trait, so the orchestrator can be
//! driven by real HTTP clients or by in-process test doubles.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{Captioner, SpeechSynthesizer, TextGenerator};
