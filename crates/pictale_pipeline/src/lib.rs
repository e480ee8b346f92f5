//! Orchestration of the image to caption to story to audio pipeline.
//!
//! - [`Storyteller`] turns a scenario into a short story through a
//!   [`TextGenerator`](pictale_interface::TextGenerator)
//! - [`Narrator`] synthesizes a story and persists the audio for its run
//! - [`StoryPipeline`] runs the three stages in order for one image
//!
//! Stages run strictly in sequence and the first failure aborts the run.
//! Nothing is retried.
//!
//! # Example
//!
//! ```no_run
//! use pictale_config::{Credentials, PictaleConfig};
//! use pictale_core::ImageReference;
//! use pictale_pipeline::StoryPipeline;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PictaleConfig::load()?;
//! let credentials = Credentials::from_env();
//! credentials.validate()?;
//!
//! let pipeline = StoryPipeline::from_config(&config, &credentials)?;
//! let run = pipeline.run(ImageReference::from_path("cat.jpg")).await?;
//! println!("{} -> {}", run.scenario(), run.story());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod narrator;
mod pipeline;
mod storyteller;

pub use narrator::Narrator;
pub use pipeline::StoryPipeline;
pub use storyteller::Storyteller;
