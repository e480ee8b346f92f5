//! Chat completion client.

use crate::http::{build_client, excerpt, is_auth_rejection, rejected};
use crate::metrics::StageMetrics;
use crate::openai::{ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use pictale_config::{Credentials, StorytellerConfig};
use pictale_core::{GenerateRequest, GenerateResponse, PipelineStage};
use pictale_error::{
    AuthenticationError, ModelServiceError, ModelServiceErrorKind, PictaleResult,
};
use pictale_interface::TextGenerator;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, error, instrument};

const SERVICE: &str = "openai";

/// Client for an OpenAI-compatible chat completions endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiChatClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    timeout_secs: u64,
}

impl OpenAiChatClient {
    /// Create a new chat client.
    ///
    /// A missing key is not an error here; it surfaces on the first call,
    /// before any request is sent.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be initialized.
    #[instrument(skip_all, fields(base_url = %config.base_url))]
    pub fn new(config: &StorytellerConfig, credentials: &Credentials) -> PictaleResult<Self> {
        let client = build_client(config.timeout())?;
        debug!("Created chat completion client");

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: credentials.openai_api_key().ok().map(str::to_string),
            timeout_secs: config.timeout_secs,
        })
    }

    fn map_send_error(&self, e: reqwest::Error) -> ModelServiceError {
        error!(error = ?e, "Request failed");
        if e.is_timeout() {
            ModelServiceError::new(ModelServiceErrorKind::Timeout(self.timeout_secs))
        } else {
            ModelServiceError::new(ModelServiceErrorKind::Http(e.to_string()))
        }
    }

    /// Send a chat completion request.
    ///
    /// # Errors
    ///
    /// Returns an `AuthenticationError` if the key is absent or refused and a
    /// `ModelServiceError` for any other failure.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> PictaleResult<ChatCompletionResponse> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AuthenticationError::missing(Credentials::OPENAI_KEY_VAR))?;

        let url = format!("{}/chat/completions", self.base_url);
        debug!("Sending chat completion request to {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %excerpt(&body), "Server returned error");

            if is_auth_rejection(status) {
                return Err(rejected(SERVICE, status).into());
            }
            return Err(ModelServiceError::new(ModelServiceErrorKind::Api {
                status: status.as_u16(),
                message: excerpt(&body),
            })
            .into());
        }

        let result: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!("Failed to parse response: {}", e);
            if e.is_timeout() {
                ModelServiceError::new(ModelServiceErrorKind::Timeout(self.timeout_secs))
            } else {
                ModelServiceError::new(ModelServiceErrorKind::ResponseParsing(e.to_string()))
            }
        })?;

        if let Some(usage) = &result.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Chat completion successful"
            );
        }
        Ok(result)
    }
}

#[async_trait]
impl TextGenerator for OpenAiChatClient {
    #[instrument(skip(self, req), fields(model = %req.model()))]
    async fn generate(&self, req: &GenerateRequest) -> PictaleResult<GenerateResponse> {
        let start = Instant::now();
        let result = self
            .chat_completion(&ChatCompletionRequest::from(req))
            .await
            .and_then(|response| {
                let text = response
                    .choices
                    .into_iter()
                    .next()
                    .map(|choice| choice.message.content)
                    .ok_or_else(|| {
                        ModelServiceError::new(ModelServiceErrorKind::ResponseParsing(
                            "Response contained no choices".to_string(),
                        ))
                    })?;
                Ok(GenerateResponse::new(text, response.model))
            });

        StageMetrics::get().record_outcome(
            PipelineStage::Story.as_ref(),
            req.model(),
            start.elapsed().as_secs_f64(),
            &result,
        );
        result
    }

    fn provider_name(&self) -> &'static str {
        SERVICE
    }
}
