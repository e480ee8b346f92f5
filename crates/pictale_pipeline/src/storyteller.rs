//! Scenario to story.

use pictale_config::StorytellerConfig;
use pictale_core::{GenerateRequest, Message, Scenario, Story, StoryPrompt};
use pictale_error::{
    InputError, InputErrorKind, ModelServiceError, ModelServiceErrorKind, PictaleResult,
};
use pictale_interface::TextGenerator;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Produces a short story from a scenario with a language model.
///
/// The prompt embeds the scenario verbatim; the generated text is trimmed
/// and returned without any length enforcement.
#[derive(Clone)]
pub struct Storyteller {
    generator: Arc<dyn TextGenerator>,
    prompt: StoryPrompt,
    model: String,
    temperature: f32,
}

impl Storyteller {
    /// Create a storyteller from its generator and settings.
    pub fn new(generator: Arc<dyn TextGenerator>, config: &StorytellerConfig) -> Self {
        Self {
            generator,
            prompt: StoryPrompt::new(config.max_words),
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }

    /// The prompt template in use.
    pub fn prompt(&self) -> &StoryPrompt {
        &self.prompt
    }

    /// Model identifier sent with each request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the single-message generation request for `scenario`.
    ///
    /// # Errors
    ///
    /// Returns a `ModelServiceError` if the request cannot be assembled.
    pub fn build_request(&self, scenario: &Scenario) -> PictaleResult<GenerateRequest> {
        let prompt = self.prompt.render(scenario);
        debug!(prompt = %prompt, "Rendered story prompt");

        GenerateRequest::builder()
            .messages(vec![Message::user(prompt)])
            .model(self.model.clone())
            .temperature(self.temperature)
            .build()
            .map_err(|e| {
                ModelServiceError::new(ModelServiceErrorKind::InvalidRequest(e.to_string())).into()
            })
    }

    /// Generate a story for `scenario`.
    ///
    /// # Errors
    ///
    /// Returns an `InputError` for a blank scenario (no request is sent),
    /// a `ModelServiceError` for an empty completion, and whatever the
    /// generator reports otherwise.
    #[instrument(skip(self, scenario), fields(provider = self.generator.provider_name(), model = %self.model))]
    pub async fn tell(&self, scenario: &Scenario) -> PictaleResult<Story> {
        if scenario.is_blank() {
            return Err(InputError::new(InputErrorKind::EmptyScenario).into());
        }
        info!(scenario = %scenario, "Text input");

        let request = self.build_request(scenario)?;
        let response = self.generator.generate(&request).await?;

        let story = Story::new(response.text().trim());
        if story.is_blank() {
            return Err(ModelServiceError::new(ModelServiceErrorKind::EmptyCompletion).into());
        }

        info!(
            story = %story,
            words = story.word_count(),
            limit = self.prompt.max_words(),
            "Generated story output"
        );
        Ok(story)
    }
}

impl std::fmt::Debug for Storyteller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storyteller")
            .field("provider", &self.generator.provider_name())
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("prompt", &self.prompt)
            .finish()
    }
}
