//! Run identifiers and results.

use crate::{AudioArtifactRef, Scenario, Story};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier of one pipeline invocation.
///
/// Every artifact a run writes is scoped under its id, so concurrent runs
/// never share a file.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
pub struct RunId(Uuid);

impl RunId {
    /// Allocate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for RunId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Intermediate and final values of one completed pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StoryRun {
    /// Run identifier
    run_id: RunId,
    /// Caption produced from the image
    scenario: Scenario,
    /// Story produced from the scenario
    story: Story,
    /// Persisted narration
    audio: AudioArtifactRef,
    /// Completion time
    created_at: DateTime<Utc>,
}

impl StoryRun {
    /// Record a completed run.
    pub fn new(run_id: RunId, scenario: Scenario, story: Story, audio: AudioArtifactRef) -> Self {
        Self {
            run_id,
            scenario,
            story,
            audio,
            created_at: Utc::now(),
        }
    }
}
