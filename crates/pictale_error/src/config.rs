//! Settings and startup errors.

/// Invalid settings, unreadable configuration files or a listener that
/// could not be bound.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What is wrong with the settings
    pub message: String,
    /// Line that raised it
    pub line: u32,
    /// File that raised it
    pub file: &'static str,
}

impl ConfigError {
    /// Record a configuration problem at the caller's location.
    ///
    /// ```
    /// use pictale_error::ConfigError;
    ///
    /// let err = ConfigError::new("storyteller.max_words must be positive");
    /// assert!(err.to_string().starts_with("Configuration Error: storyteller.max_words"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let caller = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: caller.line(),
            file: caller.file(),
        }
    }
}
