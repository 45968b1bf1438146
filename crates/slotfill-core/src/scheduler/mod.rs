//! Task schedulers.
//!
//! Every scheduler takes the same inputs (calendar events, tasks, and a
//! work-hours window) and returns placements in the order they were made:
//! - [`GreedyScheduler`]: two-pointer matcher over shortest-first tasks;
//!   never splits, silently drops tasks that fit no single free range
//! - [`LongestTaskFirstScheduler`]: longest tasks claim the earliest free
//!   time, split across free ranges as needed
//!
//! Tasks that cannot be placed are not errors.

mod greedy;
mod longest_first;

use chrono::{DateTime, Utc};

use crate::algorithm::SchedulingAlgorithm;
use crate::calendar::CalendarEvent;
use crate::range::GroupBacking;
use crate::task::{ScheduledTask, Task};

pub use greedy::GreedyScheduler;
pub use longest_first::LongestTaskFirstScheduler;

/// A packing strategy for tasks into free time.
pub trait TaskScheduler {
    /// Strategy this scheduler implements.
    fn algorithm(&self) -> SchedulingAlgorithm;

    /// Place `tasks` into the free time `events` leave inside
    /// `[work_start, work_end]`.
    fn schedule(
        &self,
        events: &[CalendarEvent],
        tasks: &[Task],
        work_start: DateTime<Utc>,
        work_end: DateTime<Utc>,
    ) -> Vec<ScheduledTask>;
}

impl SchedulingAlgorithm {
    /// Scheduler implementing this strategy, if one exists.
    ///
    /// `backing` selects the interval container for schedulers that mutate
    /// free time.
    pub fn scheduler(&self, backing: GroupBacking) -> Option<Box<dyn TaskScheduler>> {
        match self {
            Self::ShortestTaskFirst => Some(Box::new(GreedyScheduler::new())),
            Self::LongestTaskFirst => Some(Box::new(LongestTaskFirstScheduler::with_backing(backing))),
            Self::HighestPriorityFirst => None,
        }
    }
}

/// Span wrapping one scheduling run.
fn run_span(algorithm: SchedulingAlgorithm, tasks: usize, events: usize) -> tracing::Span {
    tracing::info_span!(
        "schedule",
        run_id = %uuid::Uuid::new_v4(),
        %algorithm,
        tasks,
        events,
    )
}
