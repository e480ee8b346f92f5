//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pictale - turn a photo into a narrated micro-story
#[derive(Parser, Debug)]
#[command(name = "pictale")]
#[command(about = "Turn a photo into a narrated micro-story", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file layered over the bundled defaults
    #[arg(short, long, global = true, env = "PICTALE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Caption an image, write a story about it and narrate the story
    Run {
        /// Path to the image file
        #[arg(long)]
        image: PathBuf,
    },

    /// Serve the HTTP upload API
    Serve {
        /// Listen address, overriding `server.bind`
        #[arg(long)]
        bind: Option<String>,
    },
}
