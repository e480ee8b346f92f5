//! Pipeline stage names.

use serde::{Deserialize, Serialize};

/// One of the three model-invocation steps.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::AsRefStr,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PipelineStage {
    /// Image to scenario
    #[display("caption")]
    Caption,
    /// Scenario to story
    #[display("story")]
    Story,
    /// Story to audio
    #[display("narration")]
    Narration,
}
