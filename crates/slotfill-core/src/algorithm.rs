//! Scheduling strategy selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::queue::TaskOrdering;

/// Named scheduling strategy, as carried by requests and configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchedulingAlgorithm {
    /// Two-pointer greedy matcher over tasks sorted shortest first.
    ShortestTaskFirst,
    /// Splitting scheduler giving the longest tasks the earliest free time.
    LongestTaskFirst,
    /// Most urgent first. Only a queue ordering; no scheduler consumes it.
    HighestPriorityFirst,
}

impl SchedulingAlgorithm {
    pub const ALL: [SchedulingAlgorithm; 3] = [
        Self::ShortestTaskFirst,
        Self::LongestTaskFirst,
        Self::HighestPriorityFirst,
    ];

    /// Wire name, e.g. `SHORTEST_TASK_FIRST`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShortestTaskFirst => "SHORTEST_TASK_FIRST",
            Self::LongestTaskFirst => "LONGEST_TASK_FIRST",
            Self::HighestPriorityFirst => "HIGHEST_PRIORITY_FIRST",
        }
    }

    /// Task ordering this strategy consumes tasks in.
    pub fn ordering(&self) -> TaskOrdering {
        match self {
            Self::ShortestTaskFirst => TaskOrdering::shortest_first(),
            Self::LongestTaskFirst => TaskOrdering::longest_first(),
            Self::HighestPriorityFirst => TaskOrdering::highest_priority_first(),
        }
    }
}

impl fmt::Display for SchedulingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchedulingAlgorithm {
    type Err = ConfigError;

    /// Accepts the wire names, case-insensitively, with `-` or `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == normalized)
            .ok_or_else(|| ConfigError::UnknownAlgorithm(s.to_string()))
    }
}
