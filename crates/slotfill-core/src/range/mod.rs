//! Interval algebra over free time.
//!
//! A [`TimeRangeGroup`] keeps a set of [`TimeRange`]s in canonical form:
//! sorted by start, pairwise non-overlapping and non-adjacent. Inserting a
//! range coalesces it with every range it touches; deleting a range carves it
//! out, leaving up to two residuals per affected range.
//!
//! Two backings implement the same contract:
//! - [`ArrayTimeRangeGroup`]: contiguous `Vec`, binary search and splice
//! - [`LinkedTimeRangeGroup`]: singly linked nodes, one pass per mutation
//!
//! Callers pick one at runtime through [`GroupBacking`].

mod array;
mod linked;
mod time_range;

#[cfg(test)]
mod suite;

use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub use array::ArrayTimeRangeGroup;
pub use linked::LinkedTimeRangeGroup;
pub use time_range::TimeRange;

/// Ordered set of disjoint, non-adjacent time ranges.
///
/// Implementations are single-writer; nothing here is meant to be shared
/// across threads while being mutated.
pub trait TimeRangeGroup: fmt::Debug {
    /// Insert `range`, merging it with every stored range it overlaps or
    /// touches.
    fn add_time_range(&mut self, range: TimeRange);

    /// Remove all time covered by `range` from the group.
    fn delete_time_range(&mut self, range: TimeRange);

    /// Ranges in ascending start order.
    fn iter(&self) -> Box<dyn Iterator<Item = &TimeRange> + '_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True iff a single stored range contains `range`.
    fn has_time_range(&self, range: &TimeRange) -> bool {
        self.iter().any(|stored| stored.contains(range))
    }

    /// Snapshot of the current ranges.
    fn ranges(&self) -> Vec<TimeRange> {
        self.iter().copied().collect()
    }

    fn total_duration(&self) -> Duration {
        self.iter()
            .fold(Duration::zero(), |total, range| total + range.duration())
    }
}

/// Merge two overlapping or touching ranges into the range covering both.
pub fn merge_two_time_ranges(a: &TimeRange, b: &TimeRange) -> TimeRange {
    a.merge(b)
}

/// Whether `ranges` is sorted with strictly increasing, non-touching bounds.
pub fn is_canonical(ranges: &[TimeRange]) -> bool {
    ranges.windows(2).all(|pair| pair[0].end() < pair[1].start())
}

/// Which container backs a [`TimeRangeGroup`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBacking {
    #[default]
    Array,
    Linked,
}

impl GroupBacking {
    /// Build a group of this backing from `ranges`, inserting them one by one.
    pub fn build<I>(self, ranges: I) -> Box<dyn TimeRangeGroup>
    where
        I: IntoIterator<Item = TimeRange>,
    {
        match self {
            Self::Array => Box::new(ranges.into_iter().collect::<ArrayTimeRangeGroup>()),
            Self::Linked => Box::new(ranges.into_iter().collect::<LinkedTimeRangeGroup>()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Linked => "linked",
        }
    }
}

impl fmt::Display for GroupBacking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupBacking {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "array" => Ok(Self::Array),
            "linked" => Ok(Self::Linked),
            other => Err(ConfigError::InvalidValue {
                key: "interval_backing".to_string(),
                message: format!("expected 'array' or 'linked', got '{other}'"),
            }),
        }
    }
}
