//! Observable pipeline phase.

use serde::{Deserialize, Serialize};

/// The phase a forge run is in, as observed from outside.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ForgeStatus {
    /// No run in progress
    #[default]
    Idle,
    /// Waiting on the script composition call
    GeneratingText,
    /// Script is available; illustrations are being painted
    GeneratingImages,
    /// The run finished (possibly with missing illustrations)
    Completed,
    /// The run failed before a script was available
    Failed,
}

impl ForgeStatus {
    /// True once a story is available to display, even mid-illustration.
    pub fn story_visible(&self) -> bool {
        matches!(self, ForgeStatus::GeneratingImages | ForgeStatus::Completed)
    }
}
