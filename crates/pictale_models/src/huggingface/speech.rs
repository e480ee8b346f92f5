//! Speech synthesis through the hosted text-to-speech model.

use crate::http::{build_client, excerpt, is_auth_rejection, model_id_from_endpoint, rejected};
use crate::huggingface::SpeechRequest;
use crate::metrics::StageMetrics;
use async_trait::async_trait;
use pictale_config::{Credentials, NarratorConfig};
use pictale_core::{AudioArtifact, PipelineStage};
use pictale_error::{
    AuthenticationError, InputError, InputErrorKind, PictaleResult, SpeechServiceError,
    SpeechServiceErrorKind,
};
use pictale_interface::SpeechSynthesizer;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, error, info, instrument};

const SERVICE: &str = "huggingface";

/// Content type assumed when the service sends none.
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Speech synthesizer backed by the Hugging Face inference API.
///
/// Sends `{"inputs": "<text>"}` and treats the response body as encoded
/// audio, after checking that the status succeeded and the content type
/// is audio.
#[derive(Debug, Clone)]
pub struct HuggingFaceSpeechClient {
    client: Client,
    endpoint: String,
    model: String,
    api_token: Option<String>,
    timeout_secs: u64,
}

impl HuggingFaceSpeechClient {
    /// Creates a speech client from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be initialized.
    #[instrument(skip_all, fields(endpoint = %config.endpoint))]
    pub fn new(config: &NarratorConfig, credentials: &Credentials) -> PictaleResult<Self> {
        let client = build_client(config.timeout())?;
        debug!("Created Hugging Face speech client");

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            model: model_id_from_endpoint(&config.endpoint),
            api_token: credentials.huggingface_token().ok().map(str::to_string),
            timeout_secs: config.timeout_secs,
        })
    }

    fn map_send_error(&self, e: reqwest::Error) -> SpeechServiceError {
        error!(error = ?e, "Speech request failed");
        if e.is_timeout() {
            SpeechServiceError::new(SpeechServiceErrorKind::Timeout(self.timeout_secs))
        } else {
            SpeechServiceError::new(SpeechServiceErrorKind::Http(e.to_string()))
        }
    }

    async fn request(&self, text: &str) -> PictaleResult<AudioArtifact> {
        if text.trim().is_empty() {
            return Err(InputError::new(InputErrorKind::EmptyStory).into());
        }

        let api_token = self
            .api_token
            .as_deref()
            .ok_or_else(|| AuthenticationError::missing(Credentials::HUGGINGFACE_TOKEN_VAR))?;

        info!(chars = text.len(), "Synthesizing speech");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_token)
            .json(&SpeechRequest::new(text))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %excerpt(&body), "Speech API error");

            if is_auth_rejection(status) {
                return Err(rejected(SERVICE, status).into());
            }
            return Err(SpeechServiceError::new(SpeechServiceErrorKind::Api {
                status: status.as_u16(),
                message: excerpt(&body),
            })
            .into());
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();

        if !is_audio_content_type(&content_type) {
            let body = response.text().await.unwrap_or_default();
            error!(content_type = %content_type, body = %excerpt(&body), "Speech API returned non-audio payload");
            return Err(SpeechServiceError::new(SpeechServiceErrorKind::NotAudio {
                content_type,
                detail: excerpt(&body),
            })
            .into());
        }

        let data = response
            .bytes()
            .await
            .map_err(|e| self.map_send_error(e))?
            .to_vec();

        if data.is_empty() {
            error!("Speech API returned an empty body");
            return Err(SpeechServiceError::new(SpeechServiceErrorKind::EmptyAudio).into());
        }

        info!(size = data.len(), content_type = %content_type, "Received audio");
        Ok(AudioArtifact::new(data, media_type(&content_type)))
    }
}

#[async_trait]
impl SpeechSynthesizer for HuggingFaceSpeechClient {
    #[instrument(skip(self, text), fields(model = %self.model))]
    async fn synthesize(&self, text: &str) -> PictaleResult<AudioArtifact> {
        let start = Instant::now();
        let result = self.request(text).await;
        StageMetrics::get().record_outcome(
            PipelineStage::Narration.as_ref(),
            &self.model,
            start.elapsed().as_secs_f64(),
            &result,
        );
        result
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Media type without parameters, lowercased.
fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Accepts `audio/*` and raw octet streams.
fn is_audio_content_type(content_type: &str) -> bool {
    let media = media_type(content_type);
    media.starts_with("audio/") || media == FALLBACK_CONTENT_TYPE
}
