//! Credential errors.

/// Specific authentication failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AuthenticationErrorKind {
    /// A required credential variable is unset or empty
    #[display("Missing credential: {}", _0)]
    MissingCredential(String),

    /// A service rejected the supplied credential
    #[display("{} rejected credentials with status {}", service, status)]
    Rejected {
        /// Service that refused the request
        service: String,
        /// HTTP status returned
        status: u16,
    },
}

/// Authentication error with location tracking.
///
/// # Examples
///
/// ```
/// use pictale_error::{AuthenticationError, AuthenticationErrorKind};
///
/// let err = AuthenticationError::new(AuthenticationErrorKind::MissingCredential(
///     "OPENAI_API_KEY".to_string(),
/// ));
/// assert!(format!("{}", err).contains("OPENAI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Authentication Error: {} at line {} in {}", kind, line, file)]
pub struct AuthenticationError {
    /// The specific error kind
    pub kind: AuthenticationErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl AuthenticationError {
    /// Create a new authentication error.
    #[track_caller]
    pub fn new(kind: AuthenticationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a missing credential variable.
    #[track_caller]
    pub fn missing(variable: impl Into<String>) -> Self {
        Self::new(AuthenticationErrorKind::MissingCredential(variable.into()))
    }
}
