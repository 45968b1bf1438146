//! Free time derivation from calendar events.
//!
//! Finds the time inside a work-hours window that no calendar event covers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::range::{GroupBacking, TimeRange, TimeRangeGroup};

/// A committed calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl CalendarEvent {
    /// Create a new calendar event
    pub fn new(name: impl Into<String>, start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            start_time,
            end_time,
        }
    }

    /// Check if this event overlaps with a time range
    pub fn overlaps(&self, range: &TimeRange) -> bool {
        self.start_time < range.end() && self.end_time > range.start()
    }
}

/// Calendar events sorted by start, bound to a work-hours window.
#[derive(Debug, Clone)]
pub struct CalendarEventsGroup {
    events: Vec<CalendarEvent>,
    work_start: DateTime<Utc>,
    work_end: DateTime<Utc>,
}

impl CalendarEventsGroup {
    /// Events may be unsorted, overlapping, or outside the window.
    pub fn new(
        events: impl IntoIterator<Item = CalendarEvent>,
        work_start: DateTime<Utc>,
        work_end: DateTime<Utc>,
    ) -> Self {
        let mut events: Vec<_> = events.into_iter().collect();
        events.sort_by_key(|e| e.start_time);
        Self {
            events,
            work_start,
            work_end,
        }
    }

    /// Maximal ranges inside the work window not covered by any event,
    /// sorted by start.
    pub fn free_time_ranges(&self) -> Vec<TimeRange> {
        let mut free = Vec::new();
        if self.work_end <= self.work_start {
            return free;
        }

        let mut cursor = self.work_start;

        for event in &self.events {
            // Events are sorted, so nothing later can shorten the window.
            if event.start_time > self.work_end {
                break;
            }
            // Zero-length and inverted events occupy no time.
            if event.end_time <= event.start_time {
                continue;
            }

            if event.start_time > cursor {
                free.push(TimeRange::from_start_duration(cursor, event.start_time - cursor));
            }

            cursor = cursor.max(event.end_time);
        }

        if cursor < self.work_end {
            free.push(TimeRange::from_start_duration(cursor, self.work_end - cursor));
        }

        tracing::debug!(
            events = self.events.len(),
            free_ranges = free.len(),
            "derived free time"
        );
        free
    }

    /// Free time as a [`TimeRangeGroup`] of the requested backing.
    pub fn free_time_group(&self, backing: GroupBacking) -> Box<dyn TimeRangeGroup> {
        backing.build(self.free_time_ranges())
    }
}

/// Convenience wrapper around [`CalendarEventsGroup::free_time_ranges`].
pub fn free_time_ranges(
    events: &[CalendarEvent],
    work_start: DateTime<Utc>,
    work_end: DateTime<Utc>,
) -> Vec<TimeRange> {
    CalendarEventsGroup::new(events.iter().cloned(), work_start, work_end).free_time_ranges()
}
