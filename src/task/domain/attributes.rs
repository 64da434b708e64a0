//! Descriptive task attributes supplied at creation time.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ParseTaskDifficultyError, ParseTaskPriorityError};

/// Business priority of a task.
///
/// Priority carries no authorization meaning; listings may sort by it for
/// display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Routine work.
    Low,
    /// Default planning priority.
    Medium,
    /// Work that should preempt routine items.
    High,
    /// Drop-everything work.
    Urgent,
}

impl TaskPriority {
    /// Weight used when sorting listings by priority.
    pub(crate) const fn sort_weight(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
            Self::Urgent => 3,
        }
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Difficulty estimate recorded on a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskDifficulty {
    /// Trivial work.
    VeryEasy,
    /// Straightforward work.
    Easy,
    /// Typical work.
    Medium,
    /// Demanding work.
    Hard,
    /// Exceptionally demanding work.
    Difficult,
}

impl TaskDifficulty {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryEasy => "very_easy",
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Difficult => "difficult",
        }
    }
}

impl TryFrom<&str> for TaskDifficulty {
    type Error = ParseTaskDifficultyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "very_easy" => Ok(Self::VeryEasy),
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "difficult" => Ok(Self::Difficult),
            _ => Err(ParseTaskDifficultyError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
