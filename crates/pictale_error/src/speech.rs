//! Speech-synthesis service errors.

/// Speech service failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SpeechServiceErrorKind {
    /// HTTP request failed before a response arrived
    #[display("HTTP request failed: {}", _0)]
    Http(String),

    /// No response within the configured timeout
    #[display("Request timed out after {}s", _0)]
    Timeout(u64),

    /// The service returned an error status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// The response was successful but not an audio payload
    #[display("Expected audio, got {}: {}", content_type, detail)]
    NotAudio {
        /// Content type reported by the service
        content_type: String,
        /// Leading part of the body, for diagnostics
        detail: String,
    },

    /// The response body was empty
    #[display("Audio payload was empty")]
    EmptyAudio,
}

/// Speech service error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Speech Service Error: {} at line {} in {}", kind, line, file)]
pub struct SpeechServiceError {
    /// The error kind
    pub kind: SpeechServiceErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl SpeechServiceError {
    /// Create a new SpeechServiceError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SpeechServiceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
