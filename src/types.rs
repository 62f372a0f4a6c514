use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Canonical task identifier, as assigned by the backend store.
pub type TaskId = i64;

/// Identifier of a dependency edge record (independent of its endpoints).
pub type EdgeId = i64;

/// Task priority as stored by the backend (`1`, `2` or `3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Priority::Low),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::High),
            other => Err(format!("invalid priority: {other} (expected 1, 2 or 3)")),
        }
    }
}

impl From<Priority> for u8 {
    fn from(p: Priority) -> Self {
        match p {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What to do when a board file contains edges that a healthy store would
/// never produce (dangling endpoints, self-dependencies, cycles).
///
/// - `Warn`: log the problem and keep loading; the snapshot drops dangling
///   edges and the graph layer tolerates the rest (default).
/// - `Reject`: refuse to load the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidSnapshotPolicy {
    Warn,
    Reject,
}

impl Default for InvalidSnapshotPolicy {
    fn default() -> Self {
        InvalidSnapshotPolicy::Warn
    }
}

impl FromStr for InvalidSnapshotPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "warn" => Ok(InvalidSnapshotPolicy::Warn),
            "reject" => Ok(InvalidSnapshotPolicy::Reject),
            other => Err(format!(
                "invalid on_invalid: {other} (expected \"warn\" or \"reject\")"
            )),
        }
    }
}
