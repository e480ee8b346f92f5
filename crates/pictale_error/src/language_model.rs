//! Language-model service errors.

/// Language-model service failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelServiceErrorKind {
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

    /// The completion body could not be parsed
    #[display("Failed to parse response: {}", _0)]
    ResponseParsing(String),

    /// The service returned no completion text
    #[display("Completion was empty")]
    EmptyCompletion,

    /// A request could not be assembled
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),
}

/// Language-model service error with location tracking.
///
/// # Examples
///
/// ```
/// use pictale_error::{ModelServiceError, ModelServiceErrorKind};
///
/// let err = ModelServiceError::new(ModelServiceErrorKind::Timeout(30));
/// assert!(format!("{}", err).contains("30s"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Model Service Error: {} at line {} in {}", kind, line, file)]
pub struct ModelServiceError {
    /// The error kind
    pub kind: ModelServiceErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl ModelServiceError {
    /// Create a new ModelServiceError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ModelServiceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
