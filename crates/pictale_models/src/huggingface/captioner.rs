//! Image captioning through the hosted image-to-text model.

use crate::http::{build_client, excerpt, is_auth_rejection, model_id_from_endpoint, rejected};
use crate::huggingface::CaptionCandidate;
use crate::metrics::StageMetrics;
use async_trait::async_trait;
use pictale_config::{CaptionerConfig, Credentials};
use pictale_core::{ImageReference, PipelineStage, Scenario};
use pictale_error::{
    AuthenticationError, ModelUnavailableError, ModelUnavailableErrorKind, PictaleResult,
};
use pictale_interface::Captioner;
use reqwest::{Client, StatusCode};
use std::time::Instant;
use tracing::{debug, error, info, instrument};

const SERVICE: &str = "huggingface";

/// Captioner backed by the Hugging Face inference API.
///
/// The image bytes are posted as the request body; the first caption
/// candidate of the response becomes the scenario.
#[derive(Debug, Clone)]
pub struct HuggingFaceCaptioner {
    client: Client,
    endpoint: String,
    model: String,
    api_token: Option<String>,
    timeout_secs: u64,
}

impl HuggingFaceCaptioner {
    /// Creates a captioner from configuration.
    ///
    /// A missing token is not an error here; it surfaces on the first call.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be initialized.
    #[instrument(skip_all, fields(endpoint = %config.endpoint))]
    pub fn new(config: &CaptionerConfig, credentials: &Credentials) -> PictaleResult<Self> {
        let client = build_client(config.timeout())?;
        debug!("Created Hugging Face captioner");

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            model: model_id_from_endpoint(&config.endpoint),
            api_token: credentials.huggingface_token().ok().map(str::to_string),
            timeout_secs: config.timeout_secs,
        })
    }

    fn map_send_error(&self, e: reqwest::Error) -> ModelUnavailableError {
        error!(error = ?e, "Captioning request failed");
        if e.is_timeout() {
            ModelUnavailableError::new(ModelUnavailableErrorKind::Timeout(self.timeout_secs))
        } else {
            ModelUnavailableError::new(ModelUnavailableErrorKind::Unreachable(e.to_string()))
        }
    }

    async fn request(&self, image: &ImageReference) -> PictaleResult<Scenario> {
        let api_token = self
            .api_token
            .as_deref()
            .ok_or_else(|| AuthenticationError::missing(Credentials::HUGGINGFACE_TOKEN_VAR))?;

        let data = image.read().await?;
        info!(image = %image.describe(), size = data.len(), "Captioning image input");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_token)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(data)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %excerpt(&body), "Captioning API error");

            if is_auth_rejection(status) {
                return Err(rejected(SERVICE, status).into());
            }
            let kind = if status == StatusCode::SERVICE_UNAVAILABLE {
                ModelUnavailableErrorKind::Loading(excerpt(&body))
            } else {
                ModelUnavailableErrorKind::Api {
                    status: status.as_u16(),
                    message: excerpt(&body),
                }
            };
            return Err(ModelUnavailableError::new(kind).into());
        }

        let body = response.text().await.map_err(|e| self.map_send_error(e))?;
        let candidates: Vec<CaptionCandidate> = serde_json::from_str(&body).map_err(|e| {
            error!(error = ?e, body = %excerpt(&body), "Failed to parse caption candidates");
            ModelUnavailableError::new(ModelUnavailableErrorKind::InvalidResponse(format!(
                "{}: {}",
                e,
                excerpt(&body)
            )))
        })?;

        debug!(candidates = candidates.len(), "Received caption candidates");

        let scenario = candidates
            .first()
            .map(|c| Scenario::new(c.generated_text().trim()))
            .filter(|s| !s.is_blank())
            .ok_or_else(|| ModelUnavailableError::new(ModelUnavailableErrorKind::EmptyCaption))?;

        info!(scenario = %scenario, "Generated text output");
        Ok(scenario)
    }
}

#[async_trait]
impl Captioner for HuggingFaceCaptioner {
    #[instrument(skip(self, image), fields(model = %self.model))]
    async fn caption(&self, image: &ImageReference) -> PictaleResult<Scenario> {
        let start = Instant::now();
        let result = self.request(image).await;
        StageMetrics::get().record_outcome(
            PipelineStage::Caption.as_ref(),
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
