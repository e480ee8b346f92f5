//! Shared HTTP plumbing for the hosted-model clients.

use pictale_error::{AuthenticationError, AuthenticationErrorKind, ConfigError, PictaleResult};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Longest response excerpt carried in an error message.
const BODY_EXCERPT_LEN: usize = 200;

/// Build a reqwest client with a whole-request timeout.
pub(crate) fn build_client(timeout: Duration) -> PictaleResult<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {}", e)).into())
}

/// True for statuses that mean the credential was refused.
pub(crate) fn is_auth_rejection(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
}

/// Authentication error for a refused credential.
#[track_caller]
pub(crate) fn rejected(service: &str, status: StatusCode) -> AuthenticationError {
    AuthenticationError::new(AuthenticationErrorKind::Rejected {
        service: service.to_string(),
        status: status.as_u16(),
    })
}

/// Model identifier embedded in a hosted inference URL.
///
/// `https://host/models/org/name` yields `org/name`; any other URL is
/// returned unchanged.
pub(crate) fn model_id_from_endpoint(endpoint: &str) -> String {
    endpoint
        .split_once("/models/")
        .map(|(_, id)| id.trim_end_matches('/'))
        .filter(|id| !id.is_empty())
        .unwrap_or(endpoint)
        .to_string()
}

/// Leading part of a response body, on a char boundary.
pub(crate) fn excerpt(body: &str) -> String {
    match body.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
