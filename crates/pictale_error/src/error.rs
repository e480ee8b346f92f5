//! Top-level error wrapper types.

use crate::{
    AuthenticationError, ConfigError, InputError, ModelServiceError, ModelUnavailableError,
    SpeechServiceError, StorageError,
};

/// Every error family a pipeline run can surface.
///
/// # Examples
///
/// ```
/// use pictale_error::{PictaleError, ConfigError};
///
/// let err: PictaleError = ConfigError::new("bad bind address").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PictaleErrorKind {
    /// Bad or missing image, scenario or story
    #[from(InputError)]
    Input(InputError),
    /// Missing or rejected credential
    #[from(AuthenticationError)]
    Authentication(AuthenticationError),
    /// Captioning model failure
    #[from(ModelUnavailableError)]
    ModelUnavailable(ModelUnavailableError),
    /// Language-model service failure
    #[from(ModelServiceError)]
    ModelService(ModelServiceError),
    /// Speech synthesis failure
    #[from(SpeechServiceError)]
    SpeechService(SpeechServiceError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Artifact storage error
    #[from(StorageError)]
    Storage(StorageError),
}

/// Pictale error with kind discrimination.
///
/// # Examples
///
/// ```
/// use pictale_error::{PictaleErrorKind, PictaleResult, AuthenticationError};
///
/// fn might_fail() -> PictaleResult<()> {
///     Err(AuthenticationError::missing("HUGGINGFACE_API_TOKEN"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), PictaleErrorKind::Authentication(_)));
/// assert_eq!(err.stage_error(), "AuthenticationError");
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Pictale Error: {}", _0)]
pub struct PictaleError(Box<PictaleErrorKind>);

impl PictaleError {
    /// Create a new error from a kind.
    pub fn new(kind: PictaleErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PictaleErrorKind {
        &self.0
    }

    /// Name of the error family, as reported to API clients.
    pub fn stage_error(&self) -> &'static str {
        match self.kind() {
            PictaleErrorKind::Input(_) => "InputError",
            PictaleErrorKind::Authentication(_) => "AuthenticationError",
            PictaleErrorKind::ModelUnavailable(_) => "ModelUnavailableError",
            PictaleErrorKind::ModelService(_) => "ModelServiceError",
            PictaleErrorKind::SpeechService(_) => "SpeechServiceError",
            PictaleErrorKind::Config(_) => "ConfigError",
            PictaleErrorKind::Storage(_) => "StorageError",
        }
    }
}

// Generic From implementation for any type that converts to PictaleErrorKind
impl<T> From<T> for PictaleError
where
    T: Into<PictaleErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Pictale operations.
pub type PictaleResult<T> = std::result::Result<T, PictaleError>;
