//! Longest-task-first scheduling with task splitting.
//!
//! Tasks are taken longest first. Each one fills free ranges from the
//! earliest onwards, split into parts where a range is too short, and every
//! placed part is carved out of the shared free time before the next task
//! is considered. Long tasks therefore get first claim on early free time.

use chrono::{DateTime, Duration, Utc};

use super::{run_span, TaskScheduler};
use crate::algorithm::SchedulingAlgorithm;
use crate::calendar::{CalendarEvent, CalendarEventsGroup};
use crate::queue::TaskQueue;
use crate::range::{GroupBacking, TimeRange, TimeRangeGroup};
use crate::task::{ScheduledTask, Task};

#[derive(Debug, Clone, Default)]
pub struct LongestTaskFirstScheduler {
    backing: GroupBacking,
}

impl LongestTaskFirstScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `backing` for the free time group consumed during scheduling.
    pub fn with_backing(backing: GroupBacking) -> Self {
        Self { backing }
    }

    pub fn backing(&self) -> GroupBacking {
        self.backing
    }
}

impl TaskScheduler for LongestTaskFirstScheduler {
    fn algorithm(&self) -> SchedulingAlgorithm {
        SchedulingAlgorithm::LongestTaskFirst
    }

    fn schedule(
        &self,
        events: &[CalendarEvent],
        tasks: &[Task],
        work_start: DateTime<Utc>,
        work_end: DateTime<Utc>,
    ) -> Vec<ScheduledTask> {
        let span = run_span(self.algorithm(), tasks.len(), events.len());
        let _guard = span.enter();

        let calendar = CalendarEventsGroup::new(events.iter().cloned(), work_start, work_end);
        let mut free = calendar.free_time_group(self.backing);
        tracing::debug!(
            backing = %self.backing,
            free_ranges = free.len(),
            free_minutes = free.total_duration().num_minutes(),
            "built free time group"
        );

        let mut scheduled = Vec::new();
        for task in TaskQueue::new(tasks.iter().cloned(), self.algorithm()) {
            scheduled.extend(schedule_one_task(&task, free.as_mut()));
        }

        tracing::info!(
            segments = scheduled.len(),
            incomplete = scheduled.iter().filter(|s| !s.is_completely_scheduled()).count(),
            "longest-task-first schedule complete"
        );
        scheduled
    }
}

/// Place `task` into `free`, earliest range first, splitting as needed.
///
/// Placed time is deleted from `free`. Returns no segments when the task has
/// no duration or no free time is left. When free time runs out first, the
/// last segment is marked incomplete.
fn schedule_one_task(task: &Task, free: &mut dyn TimeRangeGroup) -> Vec<ScheduledTask> {
    let mut segments: Vec<ScheduledTask> = Vec::new();
    let mut remaining = task.duration();

    if remaining <= Duration::zero() {
        return segments;
    }

    for range in free.ranges() {
        if range.is_empty() {
            continue;
        }

        let length = remaining.min(range.duration());
        let placed = TimeRange::from_start_duration(range.start(), length);
        let part = task.segment(segments.len() + 1, length);
        tracing::debug!(task = part.name(), segment = %placed, "placed segment");

        segments.push(ScheduledTask::new(part, range.start()));
        free.delete_time_range(placed);
        remaining = remaining - length;

        if remaining <= Duration::zero() {
            break;
        }
    }

    if remaining > Duration::zero() {
        if let Some(last) = segments.last_mut() {
            tracing::debug!(
                task = task.name(),
                unplaced_minutes = remaining.num_minutes(),
                "ran out of free time"
            );
            last.mark_incomplete();
        }
    } else if let [only] = segments.as_mut_slice() {
        only.rename(task.name());
    }

    segments
}
