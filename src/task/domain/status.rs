//! Task lifecycle status and transition rules.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ParseTaskStatusError;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not begun; the initial status for every task.
    NotStarted,
    /// Work is underway.
    InProgress,
    /// Work is awaiting review.
    Review,
    /// Work finished and accepted.
    Completed,
    /// Work abandoned before completion.
    Cancelled,
}

impl TaskStatus {
    /// Returns `true` when a task may move from `self` to `target`.
    ///
    /// Self-transitions are never legal, and terminal statuses admit no
    /// outbound moves.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::NotStarted, Self::InProgress | Self::Review)
                | (Self::InProgress, Self::Review)
                | (Self::Review, Self::Completed | Self::Cancelled)
        )
    }

    /// Returns `true` for statuses that admit no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Review => "review",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "not_started" => Ok(Self::NotStarted),
            "in_progress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
