//! Closed time interval between two instants.

use std::fmt;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::Serialize;

use crate::error::ValidationError;

/// A closed interval `[start, end]` between two instants.
///
/// Equality and ordering are by `(start, end)`; field order matters for the
/// derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeRange {
    /// Create a range from its bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimeRange`] when `end` is before `start`.
    pub fn from_start_end(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ValidationError> {
        if end < start {
            return Err(ValidationError::InvalidTimeRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Create a range starting at `start` lasting `duration`.
    ///
    /// Negative durations are clamped to zero; an end past the representable
    /// range saturates at the latest instant.
    pub fn from_start_duration(start: DateTime<Utc>, duration: Duration) -> Self {
        Self {
            start,
            end: start
                .checked_add_signed(duration.max(Duration::zero()))
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// True for a zero-length range.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `other` lies entirely inside this range (bounds inclusive).
    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether the two ranges share time.
    ///
    /// Containment counts as overlap even for zero-length ranges. Ranges that
    /// only touch at a bound are adjacent, not overlapping.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        (self.start < other.end && other.start < self.end)
            || self.contains(other)
            || other.contains(self)
    }

    /// Whether one range ends exactly where the other starts.
    pub fn is_adjacent(&self, other: &TimeRange) -> bool {
        self.end == other.start || other.end == self.start
    }

    /// Overlapping or adjacent ranges coalesce into one.
    pub fn can_merge_with(&self, other: &TimeRange) -> bool {
        !(self.end < other.start || other.end < self.start)
    }

    /// Smallest range covering both. Only meaningful when
    /// [`can_merge_with`](Self::can_merge_with) holds.
    pub fn merge(&self, other: &TimeRange) -> TimeRange {
        TimeRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// What remains of this range once `other` is removed: the part strictly
    /// before `other.start` and the part strictly after `other.end`.
    pub fn subtract(&self, other: &TimeRange) -> (Option<TimeRange>, Option<TimeRange>) {
        let before = (self.start < other.start).then(|| TimeRange {
            start: self.start,
            end: other.start.min(self.end),
        });
        let after = (self.end > other.end).then(|| TimeRange {
            start: other.end.max(self.start),
            end: self.end,
        });
        (before, after)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.end.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }
}
