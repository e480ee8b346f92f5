//! Recording mock HTTP server.

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use std::sync::{Arc, Mutex};

/// What the mock answers with.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: StatusCode,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl CannedResponse {
    pub fn json(status: StatusCode, body: serde_json::Value) -> Self {
        Self {
            status,
            content_type: "application/json".to_string(),
            body: body.to_string().into_bytes(),
        }
    }

    pub fn audio(body: &[u8]) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: "audio/flac".to_string(),
            body: body.to_vec(),
        }
    }
}

/// One request as the mock saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("Request body was not JSON")
    }
}

#[derive(Clone)]
struct MockState {
    response: CannedResponse,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// In-process HTTP server bound to an ephemeral local port.
pub struct MockServer {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    /// Start a server that answers every request with `response`.
    pub async fn start(response: CannedResponse) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            response,
            requests: requests.clone(),
        };

        let app = Router::new().fallback(record).with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("Mock server has no address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock server failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    /// URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header_str = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: uri.path().to_string(),
        authorization: header_str(header::AUTHORIZATION),
        content_type: header_str(header::CONTENT_TYPE),
        body: body.to_vec(),
    });

    let canned = state.response;
    (
        canned.status,
        [(header::CONTENT_TYPE, canned.content_type)],
        canned.body,
    )
        .into_response()
}
