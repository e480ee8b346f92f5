//! Run artifact storage errors.

/// What went wrong while persisting or loading a run artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StorageErrorKind {
    /// A run directory could not be created
    #[display("Cannot create directory {}: {}", path, reason)]
    DirectoryCreation {
        /// Directory that was being created
        path: String,
        /// Underlying I/O failure
        reason: String,
    },
    /// An artifact could not be written or moved into place
    #[display("Cannot write {}: {}", path, reason)]
    FileWrite {
        /// Destination file
        path: String,
        /// Underlying I/O failure
        reason: String,
    },
    /// An artifact exists but could not be read
    #[display("Cannot read {}: {}", path, reason)]
    FileRead {
        /// Source file
        path: String,
        /// Underlying I/O failure
        reason: String,
    },
    /// A run's artifacts could not be deleted
    #[display("Cannot remove {}: {}", path, reason)]
    Removal {
        /// File or directory being removed
        path: String,
        /// Underlying I/O failure
        reason: String,
    },
    /// The run has no such artifact
    #[display("No artifact at {}", _0)]
    NotFound(String),
    /// An artifact name would leave its run directory
    #[display("Artifact name must be a bare file name: {}", _0)]
    InvalidName(String),
}

impl StorageErrorKind {
    /// Classify an I/O failure on `path` into a read-side kind.
    pub fn read_failure(path: impl std::fmt::Display, err: &std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path.to_string())
        } else {
            Self::FileRead {
                path: path.to_string(),
                reason: err.to_string(),
            }
        }
    }
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use pictale_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::NotFound("runs/42/generated_audio.flac".into()));
/// assert!(format!("{}", err).contains("No artifact at runs/42"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// Error kind
    pub kind: StorageErrorKind,
    /// Line number where the error was raised
    pub line: u32,
    /// Source file where the error was raised
    pub file: &'static str,
}

impl StorageError {
    /// Wrap a kind, capturing the caller's location.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
