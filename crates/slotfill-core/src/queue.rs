//! Task orderings and the per-strategy task queue.
//!
//! An ordering is an explicit list of `(key, direction)` pairs compared
//! lexicographically. Every built-in ordering ends with the task name so that
//! distinct tasks never tie.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::algorithm::SchedulingAlgorithm;
use crate::error::ConfigError;
use crate::task::Task;

/// Task attribute an ordering compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Duration,
    Priority,
    Name,
}

impl SortKey {
    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match self {
            Self::Duration => a.duration().cmp(&b.duration()),
            Self::Priority => a.priority().cmp(&b.priority()),
            Self::Name => a.name().cmp(b.name()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Lexicographic comparator over task keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOrdering {
    keys: Vec<(SortKey, Direction)>,
}

impl TaskOrdering {
    pub fn new(keys: impl IntoIterator<Item = (SortKey, Direction)>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Duration ascending, then name.
    pub fn shortest_first() -> Self {
        Self::new([
            (SortKey::Duration, Direction::Ascending),
            (SortKey::Name, Direction::Ascending),
        ])
    }

    /// Duration descending, then most urgent, then name.
    pub fn longest_first() -> Self {
        Self::new([
            (SortKey::Duration, Direction::Descending),
            (SortKey::Priority, Direction::Descending),
            (SortKey::Name, Direction::Ascending),
        ])
    }

    /// Most urgent first, then shortest, then name.
    pub fn highest_priority_first() -> Self {
        Self::new([
            (SortKey::Priority, Direction::Descending),
            (SortKey::Duration, Direction::Ascending),
            (SortKey::Name, Direction::Ascending),
        ])
    }

    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        self.keys
            .iter()
            .map(|(key, direction)| direction.apply(key.compare(a, b)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Stable sort of `tasks` by this ordering.
    pub fn sort(&self, tasks: &mut [Task]) {
        tasks.sort_by(|a, b| self.compare(a, b));
    }
}

/// Tasks held in the order a scheduling strategy consumes them.
#[derive(Debug, Clone)]
pub struct TaskQueue {
    ordering: TaskOrdering,
    tasks: VecDeque<Task>,
}

impl TaskQueue {
    pub fn new(tasks: impl IntoIterator<Item = Task>, algorithm: SchedulingAlgorithm) -> Self {
        Self::with_ordering(tasks, algorithm.ordering())
    }

    pub fn with_ordering(tasks: impl IntoIterator<Item = Task>, ordering: TaskOrdering) -> Self {
        let mut tasks: Vec<Task> = tasks.into_iter().collect();
        ordering.sort(&mut tasks);
        Self {
            ordering,
            tasks: tasks.into(),
        }
    }

    /// Build a queue from boundary input where either part may be absent.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingTaskList`] or [`ConfigError::MissingAlgorithm`]
    /// when an input is absent, [`ConfigError::UnknownAlgorithm`] when the
    /// selector names no strategy.
    pub fn from_selector(tasks: Option<Vec<Task>>, selector: Option<&str>) -> Result<Self, ConfigError> {
        let tasks = tasks.ok_or(ConfigError::MissingTaskList)?;
        let algorithm: SchedulingAlgorithm = selector.ok_or(ConfigError::MissingAlgorithm)?.parse()?;
        Ok(Self::new(tasks, algorithm))
    }

    pub fn ordering(&self) -> &TaskOrdering {
        &self.ordering
    }

    pub fn peek(&self) -> Option<&Task> {
        self.tasks.front()
    }

    /// Pop the head of the queue.
    pub fn remove(&mut self) -> Option<Task> {
        self.tasks.pop_front()
    }

    /// Insert `task` after every queued task that does not order after it.
    pub fn push(&mut self, task: Task) {
        let index = self
            .tasks
            .partition_point(|queued| self.ordering.compare(queued, &task) != Ordering::Greater);
        self.tasks.insert(index, task);
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}

impl Iterator for TaskQueue {
    type Item = Task;

    fn next(&mut self) -> Option<Task> {
        self.remove()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tasks.len(), Some(self.tasks.len()))
    }
}
