//! Tests for the hosted image captioner against a local mock server.

mod test_utils;

use axum::http::StatusCode;
use pictale_config::{CaptionerConfig, Credentials};
use pictale_core::ImageReference;
use pictale_error::{InputErrorKind, ModelUnavailableErrorKind, PictaleErrorKind};
use pictale_interface::Captioner;
use pictale_models::HuggingFaceCaptioner;
use serde_json::json;
use test_utils::{CannedResponse, MockServer, jpeg_bytes};

const MODEL_PATH: &str = "/models/nlpconnect/vit-gpt2-image-captioning";

fn captioner_for(server: &MockServer, token: Option<&str>) -> HuggingFaceCaptioner {
    let config = CaptionerConfig {
        endpoint: server.url(MODEL_PATH),
        timeout_secs: 5,
    };
    let credentials = Credentials::new(token.map(str::to_string), None);
    HuggingFaceCaptioner::new(&config, &credentials).expect("Failed to build captioner")
}

#[tokio::test]
async fn test_caption_uses_first_candidate() {
    let server = MockServer::start(CannedResponse::json(
        StatusCode::OK,
        json!([
            {"generated_text": " a cat sitting on a windowsill "},
            {"generated_text": "a dog in a park"}
        ]),
    ))
    .await;
    let captioner = captioner_for(&server, Some("hf_test"));

    let scenario = captioner
        .caption(&ImageReference::from_bytes("cat.jpg", jpeg_bytes()))
        .await
        .unwrap();

    assert_eq!(scenario.as_str(), "a cat sitting on a windowsill");
    assert_eq!(captioner.model_name(), "nlpconnect/vit-gpt2-image-captioning");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, MODEL_PATH);
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer hf_test"));
    assert_eq!(requests[0].body, jpeg_bytes());
}

#[tokio::test]
async fn test_empty_image_fails_before_network() {
    let server = MockServer::start(CannedResponse::json(StatusCode::OK, json!([]))).await;
    let captioner = captioner_for(&server, Some("hf_test"));

    let err = captioner
        .caption(&ImageReference::from_bytes("empty.jpg", Vec::new()))
        .await
        .unwrap_err();

    match err.kind() {
        PictaleErrorKind::Input(e) => assert!(matches!(e.kind, InputErrorKind::EmptyImage(_))),
        other => panic!("Expected input error, got {:?}", other),
    }
    assert_eq!(server.call_count(), 0);
}

#[tokio::test]
async fn test_missing_file_is_input_error() {
    let server = MockServer::start(CannedResponse::json(StatusCode::OK, json!([]))).await;
    let captioner = captioner_for(&server, Some("hf_test"));

    let err = captioner
        .caption(&ImageReference::from_path("/definitely/not/here.jpg"))
        .await
        .unwrap_err();

    assert_eq!(err.stage_error(), "InputError");
    assert_eq!(server.call_count(), 0);
}

#[tokio::test]
async fn test_loading_model_is_unavailable() {
    let server = MockServer::start(CannedResponse::json(
        StatusCode::SERVICE_UNAVAILABLE,
        json!({"error": "Model is currently loading", "estimated_time": 20.0}),
    ))
    .await;
    let captioner = captioner_for(&server, Some("hf_test"));

    let err = captioner
        .caption(&ImageReference::from_bytes("cat.jpg", jpeg_bytes()))
        .await
        .unwrap_err();

    match err.kind() {
        PictaleErrorKind::ModelUnavailable(e) => {
            assert!(matches!(e.kind, ModelUnavailableErrorKind::Loading(_)))
        }
        other => panic!("Expected model unavailable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_candidate_list_is_unavailable() {
    let server = MockServer::start(CannedResponse::json(StatusCode::OK, json!([]))).await;
    let captioner = captioner_for(&server, Some("hf_test"));

    let err = captioner
        .caption(&ImageReference::from_bytes("cat.jpg", jpeg_bytes()))
        .await
        .unwrap_err();

    assert_eq!(err.stage_error(), "ModelUnavailableError");
}

#[tokio::test]
async fn test_rejected_token_is_authentication_error() {
    let server = MockServer::start(CannedResponse::json(
        StatusCode::UNAUTHORIZED,
        json!({"error": "Invalid credentials"}),
    ))
    .await;
    let captioner = captioner_for(&server, Some("hf_wrong"));

    let err = captioner
        .caption(&ImageReference::from_bytes("cat.jpg", jpeg_bytes()))
        .await
        .unwrap_err();

    assert_eq!(err.stage_error(), "AuthenticationError");
}

#[tokio::test]
async fn test_missing_token_sends_nothing() {
    let server = MockServer::start(CannedResponse::json(StatusCode::OK, json!([]))).await;
    let captioner = captioner_for(&server, None);

    let err = captioner
        .caption(&ImageReference::from_bytes("cat.jpg", jpeg_bytes()))
        .await
        .unwrap_err();

    assert_eq!(err.stage_error(), "AuthenticationError");
    assert!(format!("{}", err).contains("HUGGINGFACE_API_TOKEN"));
    assert_eq!(server.call_count(), 0);
}
