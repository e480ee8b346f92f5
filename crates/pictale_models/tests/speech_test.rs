//! Tests for the hosted speech synthesizer against a local mock server.

mod test_utils;

use axum::http::StatusCode;
use pictale_config::{Credentials, NarratorConfig};
use pictale_error::{PictaleErrorKind, SpeechServiceErrorKind};
use pictale_interface::SpeechSynthesizer;
use pictale_models::HuggingFaceSpeechClient;
use serde_json::json;
use test_utils::{CannedResponse, MockServer};

const MODEL_PATH: &str = "/models/espnet/kan-bayashi_ljspeech_vits";

fn speech_client_for(server: &MockServer, token: Option<&str>) -> HuggingFaceSpeechClient {
    let config = NarratorConfig {
        endpoint: server.url(MODEL_PATH),
        timeout_secs: 5,
        ..NarratorConfig::default()
    };
    let credentials = Credentials::new(token.map(str::to_string), None);
    HuggingFaceSpeechClient::new(&config, &credentials).expect("Failed to build speech client")
}

#[tokio::test]
async fn test_synthesize_posts_inputs_with_bearer_token() {
    let server = MockServer::start(CannedResponse::audio(b"fLaC\x00\x00\x00\x22")).await;
    let client = speech_client_for(&server, Some("hf_test"));

    let story = "A curious cat watched the rain and dreamed of distant oceans.";
    let audio = client.synthesize(story).await.unwrap();

    assert_eq!(audio.data(), b"fLaC\x00\x00\x00\x22");
    assert_eq!(audio.mime_type(), "audio/flac");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, MODEL_PATH);
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer hf_test"));
    assert_eq!(requests[0].json(), json!({ "inputs": story }));
}

#[tokio::test]
async fn test_json_error_body_is_not_audio() {
    let server = MockServer::start(CannedResponse::json(
        StatusCode::OK,
        json!({"error": "Model espnet/kan-bayashi_ljspeech_vits is currently loading"}),
    ))
    .await;
    let client = speech_client_for(&server, Some("hf_test"));

    let err = client.synthesize("A short story.").await.unwrap_err();

    match err.kind() {
        PictaleErrorKind::SpeechService(e) => {
            assert!(matches!(e.kind, SpeechServiceErrorKind::NotAudio { .. }))
        }
        other => panic!("Expected speech service error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_status_is_speech_error() {
    let server = MockServer::start(CannedResponse::json(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"error": "boom"}),
    ))
    .await;
    let client = speech_client_for(&server, Some("hf_test"));

    let err = client.synthesize("A short story.").await.unwrap_err();

    match err.kind() {
        PictaleErrorKind::SpeechService(e) => assert!(matches!(
            e.kind,
            SpeechServiceErrorKind::Api { status: 500, .. }
        )),
        other => panic!("Expected speech service error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_audio_body_is_rejected() {
    let server = MockServer::start(CannedResponse::audio(b"")).await;
    let client = speech_client_for(&server, Some("hf_test"));

    let err = client.synthesize("A short story.").await.unwrap_err();

    assert_eq!(err.stage_error(), "SpeechServiceError");
}

#[tokio::test]
async fn test_forbidden_is_authentication_error() {
    let server = MockServer::start(CannedResponse::json(
        StatusCode::FORBIDDEN,
        json!({"error": "forbidden"}),
    ))
    .await;
    let client = speech_client_for(&server, Some("hf_test"));

    let err = client.synthesize("A short story.").await.unwrap_err();

    assert_eq!(err.stage_error(), "AuthenticationError");
}

#[tokio::test]
async fn test_blank_text_sends_nothing() {
    let server = MockServer::start(CannedResponse::audio(b"fLaC")).await;
    let client = speech_client_for(&server, Some("hf_test"));

    let err = client.synthesize("   ").await.unwrap_err();

    assert_eq!(err.stage_error(), "InputError");
    assert_eq!(server.call_count(), 0);
}
