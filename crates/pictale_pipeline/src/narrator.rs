//! Story to audio file.

use pictale_config::NarratorConfig;
use pictale_core::{AudioArtifactRef, RunId, Story};
use pictale_error::{InputError, InputErrorKind, PictaleResult};
use pictale_interface::SpeechSynthesizer;
use pictale_storage::ArtifactStore;
use std::sync::Arc;
use tracing::{info, instrument};

/// Synthesizes speech for a story and writes it into the run's directory.
#[derive(Clone)]
pub struct Narrator {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    store: ArtifactStore,
    audio_file_name: String,
}

impl Narrator {
    /// Create a narrator writing audio through `store`.
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        store: ArtifactStore,
        config: &NarratorConfig,
    ) -> Self {
        Self {
            synthesizer,
            store,
            audio_file_name: config.audio_file_name.clone(),
        }
    }

    /// File name of the audio artifact within a run directory.
    pub fn audio_file_name(&self) -> &str {
        &self.audio_file_name
    }

    /// Artifact store the narrator writes to.
    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    /// Synthesize `story` and persist it for `run_id`, replacing any earlier
    /// audio of that run.
    ///
    /// # Errors
    ///
    /// Returns an `InputError` for empty story text, a `SpeechServiceError`
    /// from synthesis, or a `StorageError` if the file cannot be written.
    #[instrument(skip(self, story), fields(run_id = %run_id, model = %self.synthesizer.model_name()))]
    pub async fn narrate(&self, run_id: RunId, story: &Story) -> PictaleResult<AudioArtifactRef> {
        if story.is_blank() {
            return Err(InputError::new(InputErrorKind::EmptyStory).into());
        }

        let audio = self.synthesizer.synthesize(story.as_str()).await?;
        let stored = self
            .store
            .store_audio(run_id, &audio, &self.audio_file_name)
            .await?;

        info!(
            path = %stored.path().display(),
            size = *stored.size_bytes(),
            "Narration written"
        );
        Ok(stored)
    }
}

impl std::fmt::Debug for Narrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Narrator")
            .field("model", &self.synthesizer.model_name())
            .field("store", &self.store)
            .field("audio_file_name", &self.audio_file_name)
            .finish()
    }
}
