//! Command-line interface for Pictale.

mod commands;
mod run;
mod serve;

pub use commands::{Cli, Commands};
pub use run::run_story;
pub use serve::serve_api;

use pictale::{Credentials, PictaleConfig, PictaleResult};
use std::path::Path;

/// Load configuration and credentials, failing fast on anything missing.
pub fn load_settings(config_path: Option<&Path>) -> PictaleResult<(PictaleConfig, Credentials)> {
    let config = match config_path {
        Some(path) => PictaleConfig::from_file(path)?,
        None => PictaleConfig::load()?,
    };

    let credentials = Credentials::from_env();
    credentials.validate()?;

    tracing::debug!(?config, ?credentials, "Loaded settings");
    Ok((config, credentials))
}
