//! Configuration for the Pictale pipeline.
//!
//! Settings are layered TOML (bundled defaults, then the user's home
//! directory, then the working directory, then `PICTALE__*` environment
//! variables). Secrets live apart from settings in [`Credentials`], which are
//! read once from the process environment at startup and passed by reference
//! into every stage constructor.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod credentials;
mod settings;

pub use credentials::Credentials;
pub use settings::{
    CaptionerConfig, NarratorConfig, PictaleConfig, ServerSettings, StorageConfig,
    StorytellerConfig,
};
