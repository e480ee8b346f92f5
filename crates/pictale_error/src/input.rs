//! Input validation errors.

/// Kinds of bad or missing pipeline input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum InputErrorKind {
    /// The image reference holds no bytes
    #[display("Image is empty: {}", _0)]
    EmptyImage(String),
    /// The image could not be read from storage
    #[display("Image could not be read: {}", _0)]
    UnreadableImage(String),
    /// The uploaded file is not an accepted image format
    #[display("Unsupported image format: {}", _0)]
    UnsupportedFormat(String),
    /// The upload exceeded the configured size limit
    #[display("Upload too large: {} bytes (limit {})", size, limit)]
    UploadTooLarge {
        /// Size of the rejected upload
        size: usize,
        /// Configured limit in bytes
        limit: usize,
    },
    /// A multipart request carried no image field
    #[display("Missing upload field: {}", _0)]
    MissingUpload(String),
    /// The scenario handed to the storyteller was blank
    #[display("Scenario is empty")]
    EmptyScenario,
    /// The story handed to the narrator was blank
    #[display("Story is empty")]
    EmptyStory,
}

/// Input error with location tracking.
///
/// # Examples
///
/// ```
/// use pictale_error::{InputError, InputErrorKind};
///
/// let err = InputError::new(InputErrorKind::EmptyImage("cat.jpg".to_string()));
/// assert!(format!("{}", err).contains("cat.jpg"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Input Error: {} at line {} in {}", kind, line, file)]
pub struct InputError {
    /// The kind of error that occurred
    pub kind: InputErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl InputError {
    /// Create a new input error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InputErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
