//! The three-stage orchestrator.

use crate::{Narrator, Storyteller};
use pictale_config::{Credentials, PictaleConfig};
use pictale_core::{ImageReference, PipelineStage, RunId, StoryRun};
use pictale_error::PictaleResult;
use pictale_interface::Captioner;
use pictale_models::{HuggingFaceCaptioner, HuggingFaceSpeechClient, OpenAiChatClient};
use pictale_storage::ArtifactStore;
use std::sync::Arc;
use tracing::{Instrument, info, info_span, instrument, warn};

/// Runs caption, story and narration for one image at a time.
///
/// Holds no per-run state, so a single pipeline can serve concurrent runs;
/// each run writes only under its own run directory.
#[derive(Clone)]
pub struct StoryPipeline {
    captioner: Arc<dyn Captioner>,
    storyteller: Storyteller,
    narrator: Narrator,
}

impl StoryPipeline {
    /// Assemble a pipeline from its stages.
    pub fn new(captioner: Arc<dyn Captioner>, storyteller: Storyteller, narrator: Narrator) -> Self {
        Self {
            captioner,
            storyteller,
            narrator,
        }
    }

    /// Build the hosted-service pipeline from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a client or the artifact store cannot be created.
    #[instrument(skip_all)]
    pub fn from_config(config: &PictaleConfig, credentials: &Credentials) -> PictaleResult<Self> {
        let store = ArtifactStore::new(&config.storage.base_dir)?;
        let captioner = HuggingFaceCaptioner::new(&config.captioner, credentials)?;
        let generator = OpenAiChatClient::new(&config.storyteller, credentials)?;
        let synthesizer = HuggingFaceSpeechClient::new(&config.narrator, credentials)?;

        info!(
            captioner = %captioner.model_name(),
            story_model = %config.storyteller.model,
            "Built story pipeline"
        );

        Ok(Self::new(
            Arc::new(captioner),
            Storyteller::new(Arc::new(generator), &config.storyteller),
            Narrator::new(Arc::new(synthesizer), store, &config.narrator),
        ))
    }

    /// The story stage.
    pub fn storyteller(&self) -> &Storyteller {
        &self.storyteller
    }

    /// The narration stage.
    pub fn narrator(&self) -> &Narrator {
        &self.narrator
    }

    /// Artifact store shared by uploads and narrations.
    pub fn store(&self) -> &ArtifactStore {
        self.narrator.store()
    }

    /// Run all three stages for `image`.
    ///
    /// The image is read before any model is called; an empty or unreadable
    /// image fails with an `InputError` and nothing downstream runs.
    ///
    /// # Errors
    ///
    /// Returns the first stage error unchanged.
    pub async fn run(&self, image: ImageReference) -> PictaleResult<StoryRun> {
        self.execute(RunId::new(), image).await
    }

    /// Store an uploaded image under a fresh run, then run all three stages
    /// on the stored copy.
    ///
    /// A failed run removes its directory, upload included.
    ///
    /// # Errors
    ///
    /// Returns an `InputError` for an empty upload, a `StorageError` if it
    /// cannot be written, or the first stage error.
    pub async fn run_upload(&self, original_name: &str, data: &[u8]) -> PictaleResult<StoryRun> {
        let run_id = RunId::new();
        let image = self
            .store()
            .store_upload(run_id, original_name, data)
            .await?;

        let result = self.execute(run_id, image).await;
        if result.is_err() {
            if let Err(e) = self.store().remove_run(run_id).await {
                warn!(run_id = %run_id, error = %e, "Failed to clean up failed run");
            }
        }
        result
    }

    #[instrument(skip(self, image), fields(run_id = %run_id, image = %image.describe()))]
    async fn execute(&self, run_id: RunId, image: ImageReference) -> PictaleResult<StoryRun> {
        image.read().await?;
        info!("Starting story run");

        let scenario = self
            .captioner
            .caption(&image)
            .instrument(info_span!("stage", stage = %PipelineStage::Caption))
            .await?;

        let story = self
            .storyteller
            .tell(&scenario)
            .instrument(info_span!("stage", stage = %PipelineStage::Story))
            .await?;

        let audio = self
            .narrator
            .narrate(run_id, &story)
            .instrument(info_span!("stage", stage = %PipelineStage::Narration))
            .await?;

        info!(audio = %audio.path().display(), "Story run complete");
        Ok(StoryRun::new(run_id, scenario, story, audio))
    }
}

impl std::fmt::Debug for StoryPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryPipeline")
            .field("captioner", &self.captioner.model_name())
            .field("storyteller", &self.storyteller)
            .field("narrator", &self.narrator)
            .finish()
    }
}
