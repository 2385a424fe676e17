//! Machine model.
//!
//! A machine holds a fixed, ordered queue of tasks. The queue order is
//! input data and is never reordered — simulation consumes it front to
//! back. A candidate visitation order only decides *when* the worker
//! returns to each machine, not which task runs next on it.

use serde::{Deserialize, Serialize};

use super::Task;

/// A machine with an ordered task queue.
///
/// `Clone` is the isolation boundary for simulation: the id is copied by
/// value and every queued [`Task`] is independently owned, so scheduling
/// writes on a clone never reach the original problem instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    /// Machine identifier. Unique within a problem instance.
    pub id: String,
    /// Task queue, consumed front-to-back during simulation.
    pub tasks: Vec<Task>,
}

impl Machine {
    /// Creates a machine with an empty task queue.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tasks: Vec::new(),
        }
    }

    /// Appends a task to the queue.
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Replaces the task queue.
    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    /// Number of slots this machine contributes to a visitation order.
    ///
    /// Equals the task count: one slot per queued task.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.tasks.len()
    }

    /// Whether this machine has any queued tasks.
    #[inline]
    pub fn has_tasks(&self) -> bool {
        !self.tasks.is_empty()
    }
}
