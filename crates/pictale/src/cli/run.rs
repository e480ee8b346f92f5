//! One-shot pipeline run from the command line.

use pictale::{Credentials, ImageReference, PictaleConfig, PictaleResult, StoryPipeline};
use std::path::Path;

/// Run the pipeline on a local image and print its results.
#[tracing::instrument(skip(config, credentials), fields(image = %image.display()))]
pub async fn run_story(
    config: &PictaleConfig,
    credentials: &Credentials,
    image: &Path,
) -> PictaleResult<()> {
    let pipeline = StoryPipeline::from_config(config, credentials)?;
    let run = pipeline.run(ImageReference::from_path(image)).await?;

    println!("Run:      {}", run.run_id());
    println!("Scenario: {}", run.scenario());
    println!("Story:    {}", run.story());
    println!("Audio:    {}", run.audio().path().display());

    Ok(())
}
