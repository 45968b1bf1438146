//! JSON request/response boundary.
//!
//! A [`ScheduleRequest`] carries events, tasks and a work window in wire form
//! (durations in whole minutes, camelCase keys). [`handle_schedule_request`]
//! validates it, runs the selected scheduler and returns wire-form
//! placements.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::algorithm::SchedulingAlgorithm;
use crate::calendar::CalendarEvent;
use crate::config::SchedulerSettings;
use crate::error::{ConfigError, Result, ValidationError};
use crate::task::{ScheduledTask, Task};

/// Incoming calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Incoming task. `duration` is in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub duration: i64,
    #[serde(default)]
    pub task_priority: i32,
}

/// A full scheduling request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    #[serde(default)]
    pub events: Vec<EventPayload>,
    #[serde(default)]
    pub tasks: Option<Vec<TaskPayload>>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm_type: Option<String>,
}

/// One placed task or segment in a response. `duration` is in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTaskPayload {
    pub name: String,
    pub description: Option<String>,
    pub duration: i64,
    pub task_priority: i32,
    pub start_time: DateTime<Utc>,
    pub completely_scheduled: bool,
}

impl TryFrom<&TaskPayload> for Task {
    type Error = ValidationError;

    fn try_from(payload: &TaskPayload) -> Result<Self, Self::Error> {
        if payload.duration < 0 {
            return Err(ValidationError::InvalidValue {
                field: format!("tasks[{}].duration", payload.name),
                message: format!("must not be negative, got {}", payload.duration),
            });
        }
        let duration = Duration::try_minutes(payload.duration).ok_or_else(|| ValidationError::InvalidValue {
            field: format!("tasks[{}].duration", payload.name),
            message: format!("{} minutes is out of range", payload.duration),
        })?;
        Ok(Task::new(
            payload.name.clone(),
            payload.description.clone(),
            duration,
            payload.task_priority,
        ))
    }
}

impl From<&Task> for TaskPayload {
    fn from(task: &Task) -> Self {
        Self {
            name: task.name().to_string(),
            description: task.description().map(str::to_string),
            duration: task.duration().num_minutes(),
            task_priority: task.priority().value(),
        }
    }
}

impl From<&EventPayload> for CalendarEvent {
    fn from(payload: &EventPayload) -> Self {
        CalendarEvent::new(payload.name.clone(), payload.start_time, payload.end_time)
    }
}

impl From<&ScheduledTask> for ScheduledTaskPayload {
    fn from(scheduled: &ScheduledTask) -> Self {
        let task = scheduled.task();
        Self {
            name: task.name().to_string(),
            description: task.description().map(str::to_string),
            duration: task.duration().num_minutes(),
            task_priority: task.priority().value(),
            start_time: scheduled.start_time(),
            completely_scheduled: scheduled.is_completely_scheduled(),
        }
    }
}

impl ScheduleRequest {
    /// Parse a request from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Strategy named by the request, or `fallback` when none is given.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownAlgorithm`] when the name matches no strategy.
    pub fn algorithm(&self, fallback: SchedulingAlgorithm) -> Result<SchedulingAlgorithm, ConfigError> {
        match &self.algorithm_type {
            Some(name) => name.parse(),
            None => Ok(fallback),
        }
    }

    /// Work window after checking it is not inverted.
    pub fn work_window(&self) -> Result<(DateTime<Utc>, DateTime<Utc>), ValidationError> {
        if self.end_time < self.start_time {
            return Err(ValidationError::InvalidTimeRange {
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok((self.start_time, self.end_time))
    }

    pub fn calendar_events(&self) -> Vec<CalendarEvent> {
        self.events.iter().map(CalendarEvent::from).collect()
    }

    /// Domain tasks.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingTaskList`] when `tasks` is absent, a
    /// [`ValidationError`] for a negative or out-of-range duration.
    pub fn domain_tasks(&self) -> Result<Vec<Task>> {
        let payloads = self.tasks.as_ref().ok_or(ConfigError::MissingTaskList)?;
        let tasks = payloads
            .iter()
            .map(Task::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tasks)
    }
}

/// Validate `request`, run the selected scheduler and convert the result.
///
/// `settings` supplies the algorithm when the request names none and the
/// interval backing for schedulers that mutate free time. A strategy with no
/// scheduler yields an empty response.
///
/// # Errors
///
/// Configuration errors for an unknown strategy or missing task list;
/// validation errors for negative durations or an inverted work window.
pub fn handle_schedule_request(
    request: &ScheduleRequest,
    settings: &SchedulerSettings,
) -> Result<Vec<ScheduledTaskPayload>> {
    let algorithm = request.algorithm(settings.default_algorithm)?;
    let tasks = request.domain_tasks()?;
    let (work_start, work_end) = request.work_window()?;
    let events = request.calendar_events();

    let Some(scheduler) = algorithm.scheduler(settings.interval_backing) else {
        tracing::warn!(%algorithm, "no scheduler for algorithm, returning empty schedule");
        return Ok(Vec::new());
    };

    let scheduled = scheduler.schedule(&events, &tasks, work_start, work_end);
    Ok(scheduled.iter().map(ScheduledTaskPayload::from).collect())
}
