//! Image-captioning model errors.

/// Captioning model failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelUnavailableErrorKind {
    /// The model endpoint could not be reached
    #[display("Model unreachable: {}", _0)]
    Unreachable(String),

    /// The model did not answer within the configured timeout
    #[display("Model timed out after {}s", _0)]
    Timeout(u64),

    /// The hosted model is still loading
    #[display("Model is loading: {}", _0)]
    Loading(String),

    /// The model endpoint returned an error status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// The response could not be interpreted as caption candidates
    #[display("Invalid response: {}", _0)]
    InvalidResponse(String),

    /// The model produced no caption text
    #[display("Model returned no caption")]
    EmptyCaption,
}

/// Captioning model error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Model Unavailable: {} at {}:{}", kind, file, line)]
pub struct ModelUnavailableError {
    /// The specific error kind
    pub kind: ModelUnavailableErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelUnavailableError {
    /// Create a new captioning model error.
    #[track_caller]
    pub fn new(kind: ModelUnavailableErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
