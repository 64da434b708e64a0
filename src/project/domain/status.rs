//! Project lifecycle status as reported by the registry.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Project is actively running.
    InProgress,
    /// Project is paused; no new work may be added.
    Onhold,
    /// Project has finished.
    Completed,
}

impl ProjectStatus {
    /// Returns `true` when the project no longer accepts new tasks.
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Onhold | Self::Completed)
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Onhold => "onhold",
            Self::Completed => "completed",
        }
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseProjectStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "in_progress" => Ok(Self::InProgress),
            "onhold" => Ok(Self::Onhold),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseProjectStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned while parsing project statuses from registry data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project status: {0}")]
pub struct ParseProjectStatusError(pub String);
