//! Solution step model.
//!
//! One scheduled event on the combined timeline: either a real task
//! execution on a machine, or a synthetic wait interval where the worker
//! is idle. Modelled as a tagged variant so consumers handle both cases
//! explicitly rather than probing an optional machine id.

use serde::{Deserialize, Serialize};

use super::Task;

/// One scheduled interval in a solution's timeline.
///
/// A wait step carries a synthetic [`Task`] with `manual_ms = 0` and
/// `auto_ms` equal to the wait duration, so it participates uniformly in
/// makespan computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolutionStep {
    /// A task executed on a machine.
    Machine {
        /// Machine the task runs on.
        machine_id: String,
        /// The scheduled task.
        task: Task,
    },
    /// Idle time where the worker waits for the next machine to free up.
    Wait {
        /// Synthetic wait task spanning the idle interval.
        task: Task,
    },
}

impl SolutionStep {
    /// The machine this step runs on. `None` for wait steps.
    pub fn machine_id(&self) -> Option<&str> {
        match self {
            Self::Machine { machine_id, .. } => Some(machine_id),
            Self::Wait { .. } => None,
        }
    }

    /// The task this step represents (synthetic for wait steps).
    pub fn task(&self) -> &Task {
        match self {
            Self::Machine { task, .. } | Self::Wait { task } => task,
        }
    }

    /// End of the step's manual phase (ms).
    #[inline]
    pub fn manual_end_ms(&self) -> Option<i64> {
        self.task().manual_end_ms()
    }

    /// End of the step's automatic phase (ms). Used for makespan.
    #[inline]
    pub fn auto_end_ms(&self) -> Option<i64> {
        self.task().auto_end_ms()
    }

    /// Whether this step is a synthetic wait.
    #[inline]
    pub fn is_wait(&self) -> bool {
        matches!(self, Self::Wait { .. })
    }
}
