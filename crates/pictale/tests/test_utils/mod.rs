//! Test utilities for the HTTP API tests.

#![allow(dead_code)]

use async_trait::async_trait;
use pictale::server::{ApiState, create_router};
use pictale::{
    AudioArtifact, Captioner, GenerateRequest, GenerateResponse, ImageReference, Narrator,
    NarratorConfig, PictaleResult, Scenario, SpeechSynthesizer, StoryPipeline, Storyteller,
    StorytellerConfig, TextGenerator,
};
use pictale::ArtifactStore;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

pub const CAPTION: &str = "a cat sitting on a windowsill";
pub const STORY: &str = "The cat watched raindrops race, wishing each one carried a tiny fish.";
pub const AUDIO: &[u8] = b"fLaC\x00\x00\x00\x22api-test-audio";

/// Counts calls shared by all mock stages.
#[derive(Clone, Default)]
pub struct CallCounter(Arc<Mutex<usize>>);

impl CallCounter {
    pub fn get(&self) -> usize {
        *self.0.lock().unwrap()
    }

    fn bump(&self) {
        *self.0.lock().unwrap() += 1;
    }
}

struct FixedCaptioner(CallCounter);

#[async_trait]
impl Captioner for FixedCaptioner {
    async fn caption(&self, _image: &ImageReference) -> PictaleResult<Scenario> {
        self.0.bump();
        Ok(Scenario::new(CAPTION))
    }

    fn model_name(&self) -> &str {
        "fixed-captioner"
    }
}

struct FixedGenerator(CallCounter);

#[async_trait]
impl TextGenerator for FixedGenerator {
    async fn generate(&self, _req: &GenerateRequest) -> PictaleResult<GenerateResponse> {
        self.0.bump();
        Ok(GenerateResponse::new(STORY, None))
    }

    fn provider_name(&self) -> &'static str {
        "fixed"
    }
}

struct FixedSynthesizer {
    calls: CallCounter,
    audio: &'static [u8],
    mime_type: &'static str,
}

#[async_trait]
impl SpeechSynthesizer for FixedSynthesizer {
    async fn synthesize(&self, _text: &str) -> PictaleResult<AudioArtifact> {
        self.calls.bump();
        Ok(AudioArtifact::new(self.audio.to_vec(), self.mime_type))
    }

    fn model_name(&self) -> &str {
        "fixed-synthesizer"
    }
}

/// A running API server backed by fixed mock stages.
pub struct TestServer {
    pub base_url: String,
    pub calls: CallCounter,
    _temp: TempDir,
}

impl TestServer {
    pub async fn start(max_upload_bytes: usize) -> Self {
        Self::start_with_audio(max_upload_bytes, AUDIO, "audio/flac").await
    }

    /// Start a server whose synthesizer returns `audio` labelled `mime_type`.
    pub async fn start_with_audio(
        max_upload_bytes: usize,
        audio: &'static [u8],
        mime_type: &'static str,
    ) -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let store = ArtifactStore::new(temp.path()).expect("Failed to create store");
        let calls = CallCounter::default();

        let pipeline = StoryPipeline::new(
            Arc::new(FixedCaptioner(calls.clone())),
            Storyteller::new(
                Arc::new(FixedGenerator(calls.clone())),
                &StorytellerConfig::default(),
            ),
            Narrator::new(
                Arc::new(FixedSynthesizer {
                    calls: calls.clone(),
                    audio,
                    mime_type,
                }),
                store,
                &NarratorConfig::default(),
            ),
        );

        let app = create_router(ApiState::new(pipeline, max_upload_bytes));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Test server has no address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            calls,
            _temp: temp,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// A minimal JPEG header followed by filler bytes.
pub fn jpeg_bytes() -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0];
    data.extend_from_slice(b"cat-photo-bytes");
    data
}
