//! Error types for the Pictale pipeline.
//!
//! This crate provides the error taxonomy shared by every Pictale crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The pipeline-facing families are:
//!
//! | Type | Raised when |
//! |---|---|
//! | [`InputError`] | an image, scenario or story is missing, empty or unreadable |
//! | [`AuthenticationError`] | a credential is absent or rejected by a service |
//! | [`ModelUnavailableError`] | the captioning model cannot be reached or run |
//! | [`ModelServiceError`] | the language-model service fails |
//! | [`SpeechServiceError`] | speech synthesis fails or returns a non-audio payload |
//!
//! # Examples
//!
//! ```
//! use pictale_error::{InputError, InputErrorKind, PictaleResult};
//!
//! fn read_scenario(text: &str) -> PictaleResult<String> {
//!     if text.trim().is_empty() {
//!         Err(InputError::new(InputErrorKind::EmptyScenario))?
//!     }
//!     Ok(text.to_string())
//! }
//!
//! assert!(read_scenario("  ").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod config;
mod error;
mod input;
mod language_model;
mod model;
mod speech;
mod storage;

pub use auth::{AuthenticationError, AuthenticationErrorKind};
pub use config::ConfigError;
pub use error::{PictaleError, PictaleErrorKind, PictaleResult};
pub use input::{InputError, InputErrorKind};
pub use language_model::{ModelServiceError, ModelServiceErrorKind};
pub use model::{ModelUnavailableError, ModelUnavailableErrorKind};
pub use speech::{SpeechServiceError, SpeechServiceErrorKind};
pub use storage::{StorageError, StorageErrorKind};
