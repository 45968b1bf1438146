//! # Slotfill Core Library
//!
//! Packs tasks into the free time a calendar leaves inside a work-hours
//! window. The `slotfill` CLI is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Ranges**: canonical disjoint interval sets with array and linked-list
//!   backings behind one trait
//! - **Calendar**: free time derivation from calendar events
//! - **Queue**: per-strategy task orderings
//! - **Scheduler**: greedy shortest-first matching and longest-first
//!   splitting
//! - **Request**: JSON request/response boundary
//! - **Config**: TOML-based settings
//!
//! ## Key Components
//!
//! - [`TimeRangeGroup`]: Interval set trait
//! - [`CalendarEventsGroup`]: Free time finder
//! - [`TaskScheduler`]: Scheduling strategy trait
//! - [`handle_schedule_request`]: One-call request handling
//! - [`Config`]: Application configuration management

pub mod algorithm;
pub mod calendar;
pub mod config;
pub mod error;
pub mod queue;
pub mod range;
pub mod request;
pub mod scheduler;
pub mod task;

pub use algorithm::SchedulingAlgorithm;
pub use calendar::{free_time_ranges, CalendarEvent, CalendarEventsGroup};
pub use config::{Config, OutputConfig, SchedulerSettings};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use queue::{Direction, SortKey, TaskOrdering, TaskQueue};
pub use range::{
    merge_two_time_ranges, ArrayTimeRangeGroup, GroupBacking, LinkedTimeRangeGroup, TimeRange,
    TimeRangeGroup,
};
pub use request::{
    handle_schedule_request, EventPayload, ScheduleRequest, ScheduledTaskPayload, TaskPayload,
};
pub use scheduler::{GreedyScheduler, LongestTaskFirstScheduler, TaskScheduler};
pub use task::{Priority, ScheduledTask, Task};
