//! Two-pointer greedy matcher.

use chrono::{DateTime, Utc};

use super::{run_span, TaskScheduler};
use crate::algorithm::SchedulingAlgorithm;
use crate::calendar::{free_time_ranges, CalendarEvent};
use crate::queue::TaskQueue;
use crate::task::{ScheduledTask, Task};

/// Walks free ranges and shortest-first tasks in lockstep.
///
/// A task that does not fit the rest of the current range moves the range
/// pointer on, not the task pointer: every task still queued is at least as
/// long, so none of them would fit either. Tasks are never split; a task left
/// over when the ranges run out is dropped from the result.
#[derive(Debug, Clone, Default)]
pub struct GreedyScheduler;

impl GreedyScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl TaskScheduler for GreedyScheduler {
    fn algorithm(&self) -> SchedulingAlgorithm {
        SchedulingAlgorithm::ShortestTaskFirst
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

        let free = free_time_ranges(events, work_start, work_end);
        let mut queue = TaskQueue::new(tasks.iter().cloned(), self.algorithm());
        let mut scheduled = Vec::new();

        let Some(first) = free.first() else {
            tracing::info!("no free time inside work hours");
            return scheduled;
        };

        let mut range_index = 0;
        let mut time = first.start();

        while let (Some(range), Some(task)) = (free.get(range_index), queue.peek()) {
            time = time.max(range.start());

            // `time` never passes the current range's end, so the
            // subtraction cannot overflow where `time + duration` could.
            if task.duration() <= range.end() - time {
                tracing::debug!(task = task.name(), start = %time, "placed task");
                if let Some(task) = queue.remove() {
                    let placed = ScheduledTask::new(task, time);
                    debug_assert!(!events.iter().any(|e| e.overlaps(&placed.time_range())));
                    time = placed.end_time();
                    scheduled.push(placed);
                }
            } else {
                tracing::debug!(task = task.name(), %range, "task does not fit, next range");
                range_index += 1;
            }
        }

        tracing::info!(
            placed = scheduled.len(),
            dropped = queue.len(),
            "greedy schedule complete"
        );
        scheduled
    }
}
