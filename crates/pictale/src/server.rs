//! HTTP upload API.
//!
//! - `GET /health`
//! - `POST /api/stories` with a multipart `image` field (JPEG)
//! - `GET /api/stories/{run_id}/audio`

use axum::{
    Router,
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use pictale_core::{FALLBACK_AUDIO_TYPE, RunId, StoryRun, is_jpeg, sniff_audio_type};
use pictale_error::{InputError, InputErrorKind, PictaleError, PictaleErrorKind, StorageErrorKind};
use pictale_pipeline::StoryPipeline;
use serde::Serialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Multipart field carrying the uploaded image.
pub const IMAGE_FIELD: &str = "image";

/// Allowance for multipart framing on top of the image size limit.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// API state shared by all handlers.
#[derive(Clone)]
pub struct ApiState {
    pipeline: Arc<StoryPipeline>,
    max_upload_bytes: usize,
}

impl ApiState {
    /// Creates new API state.
    pub fn new(pipeline: StoryPipeline, max_upload_bytes: usize) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            max_upload_bytes,
        }
    }
}

/// JSON body returned for a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct StoryResponse {
    /// Run identifier
    pub run_id: RunId,
    /// Caption produced from the image
    pub scenario: String,
    /// Generated story
    pub story: String,
    /// Where to fetch the narration
    pub audio_url: String,
    /// Completion time
    pub created_at: DateTime<Utc>,
}

impl From<&StoryRun> for StoryResponse {
    fn from(run: &StoryRun) -> Self {
        Self {
            run_id: *run.run_id(),
            scenario: run.scenario().to_string(),
            story: run.story().to_string(),
            audio_url: format!("/api/stories/{}/audio", run.run_id()),
            created_at: *run.created_at(),
        }
    }
}

/// Error response with a status and a typed JSON body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error_type: &'static str,
    message: String,
}

impl ApiError {
    /// HTTP status of the response.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<PictaleError> for ApiError {
    fn from(err: PictaleError) -> Self {
        let (status, message) = match err.kind() {
            PictaleErrorKind::Input(e) => (StatusCode::BAD_REQUEST, e.kind.to_string()),
            PictaleErrorKind::Authentication(e) => (StatusCode::BAD_GATEWAY, e.kind.to_string()),
            PictaleErrorKind::ModelUnavailable(e) => (StatusCode::BAD_GATEWAY, e.kind.to_string()),
            PictaleErrorKind::ModelService(e) => (StatusCode::BAD_GATEWAY, e.kind.to_string()),
            PictaleErrorKind::SpeechService(e) => (StatusCode::BAD_GATEWAY, e.kind.to_string()),
            PictaleErrorKind::Storage(e) if matches!(e.kind, StorageErrorKind::NotFound(_)) => {
                (StatusCode::NOT_FOUND, e.kind.to_string())
            }
            PictaleErrorKind::Storage(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.kind.to_string()),
            PictaleErrorKind::Config(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.message.clone()),
        };

        if status.is_server_error() {
            error!(error = %err, status = %status, "Request failed");
        } else {
            warn!(error = %err, status = %status, "Request failed");
        }

        Self {
            status,
            error_type: err.stage_error(),
            message,
        }
    }
}

impl From<InputError> for ApiError {
    fn from(err: InputError) -> Self {
        PictaleError::from(err).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "type": self.error_type,
                "message": self.message,
            }
        });
        (self.status, Json(body)).into_response()
    }
}

/// Creates the API router.
pub fn create_router(state: ApiState) -> Router {
    let body_limit = state.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD);

    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/stories",
            post(create_story).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/api/stories/:run_id/audio", get(get_audio))
        .with_state(state)
}

/// Serve the API on `addr` until Ctrl-C.
///
/// # Errors
///
/// Returns error if the address cannot be bound or the server fails.
pub async fn serve(state: ApiState, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Pictale API listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for shutdown signal");
            }
            info!("Shutting down");
        })
        .await
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Accept one JPEG upload and run the pipeline on it.
#[instrument(skip_all)]
async fn create_story(
    State(state): State<ApiState>,
    mut multipart: Multipart,
) -> Result<Json<StoryResponse>, ApiError> {
    let (name, data) = loop {
        let field = multipart.next_field().await.map_err(|e| {
            InputError::new(InputErrorKind::UnreadableImage(e.body_text()))
        })?;
        let Some(field) = field else {
            return Err(InputError::new(InputErrorKind::MissingUpload(IMAGE_FIELD.to_string())).into());
        };
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let name = field.file_name().unwrap_or("upload.jpg").to_string();
        let data = field.bytes().await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                InputError::new(InputErrorKind::UploadTooLarge {
                    size: state.max_upload_bytes.saturating_add(1),
                    limit: state.max_upload_bytes,
                })
            } else {
                InputError::new(InputErrorKind::UnreadableImage(e.body_text()))
            }
        })?;
        break (name, data);
    };

    if data.len() > state.max_upload_bytes {
        return Err(InputError::new(InputErrorKind::UploadTooLarge {
            size: data.len(),
            limit: state.max_upload_bytes,
        })
        .into());
    }
    if data.is_empty() {
        return Err(InputError::new(InputErrorKind::EmptyImage(name)).into());
    }
    if !is_jpeg(&data) {
        return Err(InputError::new(InputErrorKind::UnsupportedFormat(format!(
            "{} is not a JPEG image",
            name
        )))
        .into());
    }

    info!(file = %name, size = data.len(), "Received upload");
    let run = state.pipeline.run_upload(&name, &data).await?;
    Ok(Json(StoryResponse::from(&run)))
}

/// Stream back a run's narration.
#[instrument(skip(state))]
async fn get_audio(
    State(state): State<ApiState>,
    Path(run_id): Path<String>,
) -> Result<Response, ApiError> {
    let run_id: RunId = run_id.parse().map_err(|_| ApiError {
        status: StatusCode::BAD_REQUEST,
        error_type: "InputError",
        message: format!("Invalid run id: {}", run_id),
    })?;

    let data = state
        .pipeline
        .store()
        .read_audio(run_id, state.pipeline.narrator().audio_file_name())
        .await?;

    let content_type = sniff_audio_type(&data).unwrap_or(FALLBACK_AUDIO_TYPE);
    Ok(([(header::CONTENT_TYPE, content_type)], data).into_response())
}
