//! The storyteller's instruction template.

/// Default upper bound on story length given to the model.
pub const DEFAULT_MAX_WORDS: usize = 20;

const PLACEHOLDER: &str = "{scenario}";

/// Fixed instructional template with one substitution point for the scenario.
///
/// The word limit is an instruction to the model only; nothing downstream
/// enforces it.
///
/// # Examples
///
/// ```
/// use pictale_core::{Scenario, StoryPrompt};
///
/// let prompt = StoryPrompt::default().render(&Scenario::new("a red kite over a beach"));
/// assert!(prompt.contains("CONTEXT: a red kite over a beach"));
/// assert!(prompt.contains("no more than 20 words"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryPrompt {
    max_words: usize,
}

impl StoryPrompt {
    /// Template with a custom word limit.
    pub fn new(max_words: usize) -> Self {
        Self { max_words }
    }

    /// Word limit rendered into the instruction.
    pub fn max_words(&self) -> usize {
        self.max_words
    }

    /// The template text with the word limit filled in and the scenario
    /// placeholder left open.
    pub fn template(&self) -> String {
        format!(
            "You are a story teller;\n\
             You can generate a short story based on a simple narrative, \
             the story should be no more than {} words;\n\
             \n\
             CONTEXT: {}\n\
             STORY:",
            self.max_words, PLACEHOLDER
        )
    }

    /// Embed `scenario` verbatim at the substitution point.
    ///
    /// The scenario is spliced in once; placeholder-like text inside it is
    /// not expanded again.
    pub fn render(&self, scenario: &crate::Scenario) -> String {
        let template = self.template();
        match template.split_once(PLACEHOLDER) {
            Some((before, after)) => format!("{}{}{}", before, scenario.as_str(), after),
            None => template,
        }
    }
}

impl Default for StoryPrompt {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WORDS)
    }
}
