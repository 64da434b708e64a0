//! Role hierarchy for assignment and escalation decisions.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Employee role within the department hierarchy.
///
/// Roles form a total order: department manager above unit head, unit head
/// above team lead, and team lead above the individual contributor roles.
/// Seniors and juniors are peers at the bottom of the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Heads the department.
    DepManager,
    /// Heads a unit within the department.
    UnitHead,
    /// Leads a team of contributors.
    TeamLead,
    /// Senior individual contributor.
    Senior,
    /// Junior individual contributor.
    Junior,
}

impl Role {
    /// Position in the hierarchy; larger outranks smaller.
    const fn rank(self) -> u8 {
        match self {
            Self::DepManager => 3,
            Self::UnitHead => 2,
            Self::TeamLead => 1,
            Self::Senior | Self::Junior => 0,
        }
    }

    /// Returns `true` when `self` sits at or above `other` in the hierarchy.
    #[must_use]
    pub const fn outranks_or_equals(self, other: Self) -> bool {
        self.rank() >= other.rank()
    }

    /// Returns `true` when `self` sits strictly above `other`.
    #[must_use]
    pub const fn strictly_outranks(self, other: Self) -> bool {
        self.rank() > other.rank()
    }

    /// Returns `true` for roles with supervisory authority over tasks.
    #[must_use]
    pub const fn is_supervisor(self) -> bool {
        matches!(self, Self::DepManager | Self::UnitHead | Self::TeamLead)
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DepManager => "dep_manager",
            Self::UnitHead => "unit_head",
            Self::TeamLead => "team_lead",
            Self::Senior => "senior",
            Self::Junior => "junior",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "dep_manager" => Ok(Self::DepManager),
            "unit_head" => Ok(Self::UnitHead),
            "team_lead" => Ok(Self::TeamLead),
            "senior" => Ok(Self::Senior),
            "junior" => Ok(Self::Junior),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned while parsing roles from directory records.
///
/// An unknown role token is a directory integration fault, not a business
/// decision; it surfaces at the boundary rather than inside decision logic.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);
