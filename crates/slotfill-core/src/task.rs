//! Task value types: unscheduled work items and their placements.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::range::TimeRange;

/// Urgency level of a task.
///
/// Numerically larger values are more urgent. Orderings that favour urgency
/// sort priorities descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(pub i32);

impl Priority {
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for Priority {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An unscheduled unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task {
    name: String,
    description: Option<String>,
    duration: Duration,
    priority: Priority,
}

impl Task {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        duration: Duration,
        priority: impl Into<Priority>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            duration,
            priority: priority.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// The `part`-th slice of this task (1-indexed), lasting `duration`.
    pub fn segment(&self, part: usize, duration: Duration) -> Task {
        Task {
            name: format!("{} (Part {})", self.name, part),
            description: self.description.clone(),
            duration,
            priority: self.priority,
        }
    }

    /// Same task under a different name.
    pub fn renamed(&self, name: impl Into<String>) -> Task {
        Task {
            name: name.into(),
            ..self.clone()
        }
    }
}

/// A task (or task segment) placed at a start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTask {
    task: Task,
    start_time: DateTime<Utc>,
    completely_scheduled: bool,
}

impl ScheduledTask {
    /// A fully placed task.
    pub fn new(task: Task, start_time: DateTime<Utc>) -> Self {
        Self::with_completion(task, start_time, true)
    }

    pub fn with_completion(task: Task, start_time: DateTime<Utc>, completely_scheduled: bool) -> Self {
        Self {
            task,
            start_time,
            completely_scheduled,
        }
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Saturates at the latest representable instant.
    pub fn end_time(&self) -> DateTime<Utc> {
        self.time_range().end()
    }

    pub fn time_range(&self) -> TimeRange {
        TimeRange::from_start_duration(self.start_time, self.task.duration)
    }

    pub fn is_completely_scheduled(&self) -> bool {
        self.completely_scheduled
    }

    pub(crate) fn mark_incomplete(&mut self) {
        self.completely_scheduled = false;
    }

    pub(crate) fn rename(&mut self, name: &str) {
        self.task = self.task.renamed(name);
    }
}
