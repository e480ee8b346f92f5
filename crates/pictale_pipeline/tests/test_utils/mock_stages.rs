//! Mock stage implementations.

use async_trait::async_trait;
use pictale_core::{AudioArtifact, GenerateRequest, GenerateResponse, ImageReference, Scenario};
use pictale_error::{
    ModelServiceError, ModelServiceErrorKind, ModelUnavailableError, ModelUnavailableErrorKind,
    PictaleResult, SpeechServiceError, SpeechServiceErrorKind,
};
use pictale_interface::{Captioner, SpeechSynthesizer, TextGenerator};
use std::sync::{Arc, Mutex};

/// Captioner returning a fixed caption or a fixed error.
pub struct MockCaptioner {
    behavior: Result<String, ModelUnavailableErrorKind>,
    call_count: Arc<Mutex<usize>>,
    images: Arc<Mutex<Vec<ImageReference>>>,
}

impl MockCaptioner {
    /// Always succeed with `caption`.
    pub fn new_success(caption: impl Into<String>) -> Self {
        Self {
            behavior: Ok(caption.into()),
            call_count: Arc::new(Mutex::new(0)),
            images: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always fail with `error`.
    pub fn new_error(error: ModelUnavailableErrorKind) -> Self {
        Self {
            behavior: Err(error),
            call_count: Arc::new(Mutex::new(0)),
            images: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of times caption() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Images received so far.
    pub fn images(&self) -> Vec<ImageReference> {
        self.images.lock().unwrap().clone()
    }
}

#[async_trait]
impl Captioner for MockCaptioner {
    async fn caption(&self, image: &ImageReference) -> PictaleResult<Scenario> {
        *self.call_count.lock().unwrap() += 1;
        self.images.lock().unwrap().push(image.clone());

        match &self.behavior {
            Ok(text) => Ok(Scenario::new(text.clone())),
            Err(kind) => Err(ModelUnavailableError::new(kind.clone()).into()),
        }
    }

    fn model_name(&self) -> &str {
        "mock-captioner"
    }
}

/// Text generator returning a fixed completion or a fixed error.
pub struct MockGenerator {
    behavior: Result<String, ModelServiceErrorKind>,
    call_count: Arc<Mutex<usize>>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl MockGenerator {
    /// Always succeed with `text`.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self {
            behavior: Ok(text.into()),
            call_count: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always fail with `error`.
    pub fn new_error(error: ModelServiceErrorKind) -> Self {
        Self {
            behavior: Err(error),
            call_count: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of times generate() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, req: &GenerateRequest) -> PictaleResult<GenerateResponse> {
        *self.call_count.lock().unwrap() += 1;
        self.requests.lock().unwrap().push(req.clone());

        match &self.behavior {
            Ok(text) => Ok(GenerateResponse::new(text.clone(), Some(req.model().clone()))),
            Err(kind) => Err(ModelServiceError::new(kind.clone()).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Speech synthesizer returning fixed audio bytes or a fixed error.
pub struct MockSynthesizer {
    behavior: Result<Vec<u8>, SpeechServiceErrorKind>,
    call_count: Arc<Mutex<usize>>,
    texts: Arc<Mutex<Vec<String>>>,
}

impl MockSynthesizer {
    /// Always succeed with `audio`.
    pub fn new_success(audio: &[u8]) -> Self {
        Self {
            behavior: Ok(audio.to_vec()),
            call_count: Arc::new(Mutex::new(0)),
            texts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always fail with `error`.
    pub fn new_error(error: SpeechServiceErrorKind) -> Self {
        Self {
            behavior: Err(error),
            call_count: Arc::new(Mutex::new(0)),
            texts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of times synthesize() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Texts received so far.
    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    async fn synthesize(&self, text: &str) -> PictaleResult<AudioArtifact> {
        *self.call_count.lock().unwrap() += 1;
        self.texts.lock().unwrap().push(text.to_string());

        match &self.behavior {
            Ok(data) => Ok(AudioArtifact::new(data.clone(), "audio/flac")),
            Err(kind) => Err(SpeechServiceError::new(kind.clone()).into()),
        }
    }

    fn model_name(&self) -> &str {
        "mock-synthesizer"
    }
}
