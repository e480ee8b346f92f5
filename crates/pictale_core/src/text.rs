//! Scenario and story text values.

use serde::{Deserialize, Serialize};

/// Textual description of an image, produced by the captioning stage.
///
/// # Examples
///
/// ```
/// use pictale_core::Scenario;
///
/// let scenario = Scenario::new("a cat sitting on a windowsill");
/// assert_eq!(scenario.as_str(), "a cat sitting on a windowsill");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
#[serde(transparent)]
pub struct Scenario(String);

impl Scenario {
    /// Wrap caption text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrow the text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the text has no visible characters.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// Short narrative generated from a scenario.
///
/// The length is a soft constraint given to the language model; it is
/// reported through [`Story::word_count`] but never enforced.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
#[serde(transparent)]
pub struct Story(String);

impl Story {
    /// Wrap story text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrow the text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the text has no visible characters.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Number of whitespace-separated words.
    pub fn word_count(&self) -> usize {
        word_count(&self.0)
    }
}

/// Count whitespace-separated words in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
