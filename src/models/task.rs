//! Task model.
//!
//! A task is one unit of work on a machine's queue. It has a manual
//! phase (requires the worker's attention) followed by an automatic
//! phase (the machine runs unattended).
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1

use serde::{Deserialize, Serialize};

/// A schedulable task with a manual and an automatic phase.
///
/// Durations are fixed at construction; `start_ms` is assigned exactly
/// once, during simulation, on a copy private to that simulation.
///
/// # Time Representation
/// All times are in milliseconds relative to a scheduling epoch (t=0).
/// The consumer defines what t=0 means (e.g., shift start, midnight UTC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task label. Not required to be unique.
    pub id: String,
    /// Duration the worker must attend this task (ms).
    pub manual_ms: i64,
    /// Duration the machine runs unattended after the manual phase (ms).
    pub auto_ms: i64,
    /// Scheduled start time (ms). `None` until the task is scheduled.
    pub start_ms: Option<i64>,
}

impl Task {
    /// Creates an unscheduled task with the given durations.
    pub fn new(id: impl Into<String>, manual_ms: i64, auto_ms: i64) -> Self {
        Self {
            id: id.into(),
            manual_ms,
            auto_ms,
            start_ms: None,
        }
    }

    /// Creates a synthetic wait task: no manual phase, already scheduled,
    /// spanning `wait_ms` of idle time from `start_ms`.
    pub(crate) fn wait(start_ms: i64, wait_ms: i64) -> Self {
        Self {
            id: "WAIT".into(),
            manual_ms: 0,
            auto_ms: wait_ms,
            start_ms: Some(start_ms),
        }
    }

    /// End of the manual phase (ms). `None` if the task is unscheduled.
    ///
    /// Callers must treat an unscheduled task's end times as undefined,
    /// never zero.
    #[inline]
    pub fn manual_end_ms(&self) -> Option<i64> {
        self.start_ms.map(|start| start + self.manual_ms)
    }

    /// End of the automatic phase (ms). `None` if the task is unscheduled.
    #[inline]
    pub fn auto_end_ms(&self) -> Option<i64> {
        self.manual_end_ms().map(|end| end + self.auto_ms)
    }

    /// Whether this task has been assigned a start time.
    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.start_ms.is_some()
    }
}
