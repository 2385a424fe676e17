//! Single-order schedule simulator.
//!
//! Turns one candidate visitation order into a concrete, time-stamped
//! schedule. The worker is a single scarce resource that is busy only
//! during manual phases; each machine stays busy through its full
//! manual+automatic duration. The visitation order decides which manual
//! phase the worker performs next; automatic phases proceed on their
//! own once started.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Machine, SolutionStep, Task};

/// Per-machine bookkeeping during simulation.
///
/// Holds a private copy of the machine's task queue so scheduling writes
/// never reach the originating problem instance.
#[derive(Debug)]
struct MachineTracker {
    next_auto_available: i64,
    next_task_index: usize,
    tasks: Vec<Task>,
}

/// The simulated schedule for one candidate visitation order.
///
/// Fully built at construction and immutable afterward. Steps are in
/// scheduling order: wait steps appear immediately before the execution
/// they precede, and a trailing wait covers automatic phases that
/// outlast the worker's last manual phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    machine_order: Vec<String>,
    steps: Vec<SolutionStep>,
    current_runtime_ms: i64,
}

impl Solution {
    /// Simulates `machine_order` against the given machines.
    ///
    /// The n-th occurrence of a machine id in the order consumes that
    /// machine's n-th queued task. An id whose queue is exhausted (or
    /// that names no machine) is a silent no-op for that position.
    pub fn new(machines: &[Machine], machine_order: &[String]) -> Self {
        let mut trackers: HashMap<&str, MachineTracker> = machines
            .iter()
            .map(|machine| {
                (
                    machine.id.as_str(),
                    MachineTracker {
                        next_auto_available: 0,
                        next_task_index: 0,
                        tasks: machine.tasks.clone(),
                    },
                )
            })
            .collect();

        let mut steps: Vec<SolutionStep> = Vec::with_capacity(machine_order.len());
        let mut current_runtime: i64 = 0;
        let mut next_manual_available: i64 = 0;

        for machine_id in machine_order {
            let Some(tracker) = trackers.get_mut(machine_id.as_str()) else {
                continue;
            };
            if tracker.next_task_index >= tracker.tasks.len() {
                continue;
            }

            let worker_busy = next_manual_available > current_runtime;
            let machine_busy = tracker.next_auto_available > current_runtime;
            if worker_busy || machine_busy {
                let resume_at = next_manual_available.max(tracker.next_auto_available);
                steps.push(SolutionStep::Wait {
                    task: Task::wait(current_runtime, resume_at - current_runtime),
                });
                current_runtime = resume_at;
                tracker.next_auto_available = current_runtime;
            }

            let task = &mut tracker.tasks[tracker.next_task_index];
            tracker.next_task_index += 1;
            task.start_ms = Some(current_runtime);
            let manual_end = current_runtime + task.manual_ms;
            tracker.next_auto_available = manual_end + task.auto_ms;
            current_runtime = manual_end;
            // The worker is exclusive across machines: no other manual
            // phase may begin before this one ends.
            next_manual_available = manual_end;
            steps.push(SolutionStep::Machine {
                machine_id: machine_id.clone(),
                task: task.clone(),
            });
        }

        // Trailing wait: machines may still be running automatic phases
        // after the worker's last manual phase.
        if !steps.is_empty() {
            let makespan = steps
                .iter()
                .filter_map(SolutionStep::auto_end_ms)
                .fold(0, i64::max);
            if makespan > current_runtime {
                steps.push(SolutionStep::Wait {
                    task: Task::wait(current_runtime, makespan - current_runtime),
                });
                current_runtime = makespan;
            }
        }

        Self {
            machine_order: machine_order.to_vec(),
            steps,
            current_runtime_ms: current_runtime,
        }
    }

    /// Total makespan (ms): the latest automatic-phase end across all
    /// steps, floored at 0. `None` when no steps were scheduled.
    ///
    /// Recomputed on demand, never cached.
    pub fn total_runtime_ms(&self) -> Option<i64> {
        if self.steps.is_empty() {
            return None;
        }
        Some(
            self.steps
                .iter()
                .filter_map(SolutionStep::auto_end_ms)
                .fold(0, i64::max),
        )
    }

    /// The visitation order this solution was simulated from.
    pub fn machine_order(&self) -> &[String] {
        &self.machine_order
    }

    /// Scheduled steps, in scheduling order.
    pub fn steps(&self) -> &[SolutionStep] {
        &self.steps
    }

    /// Timeline cursor position at the end of simulation (ms).
    pub fn current_runtime_ms(&self) -> i64 {
        self.current_runtime_ms
    }

    /// Number of steps, wait steps included.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_single_machine_runs_queue_in_order() {
        // No automatic phases → back-to-back manual work, no idle gaps.
        let machines = vec![Machine::new("M1")
            .with_task(Task::new("A", 2000, 0))
            .with_task(Task::new("B", 1000, 0))];
        let solution = Solution::new(&machines, &order(&["M1", "M1"]));

        assert_eq!(solution.step_count(), 2);
        assert!(solution.steps().iter().all(|s| !s.is_wait()));
        assert_eq!(solution.steps()[0].task().id, "A");
        assert_eq!(solution.steps()[0].task().start_ms, Some(0));
        assert_eq!(solution.steps()[1].task().id, "B");
        assert_eq!(solution.steps()[1].task().start_ms, Some(2000));
        assert_eq!(solution.total_runtime_ms(), Some(3000));
    }

    #[test]
    fn test_wait_for_machine_automatic_phase() {
        // A(manual=2000, auto=1000), B(manual=1000, auto=3000) on one machine.
        // A: [0, 2000] manual, auto ends 3000. Worker returns at 2000 but the
        // machine is busy until 3000 → wait [2000, 3000]. B: manual [3000, 4000],
        // auto ends 7000 → trailing wait [4000, 7000].
        let machines = vec![Machine::new("M1")
            .with_task(Task::new("A", 2000, 1000))
            .with_task(Task::new("B", 1000, 3000))];
        let solution = Solution::new(&machines, &order(&["M1", "M1"]));

        let steps = solution.steps();
        assert_eq!(steps.len(), 4);

        assert_eq!(steps[0].machine_id(), Some("M1"));
        assert_eq!(steps[0].task().start_ms, Some(0));
        assert_eq!(steps[0].manual_end_ms(), Some(2000));
        assert_eq!(steps[0].auto_end_ms(), Some(3000));

        assert!(steps[1].is_wait());
        assert_eq!(steps[1].task().start_ms, Some(2000));
        assert_eq!(steps[1].auto_end_ms(), Some(3000));

        assert_eq!(steps[2].task().id, "B");
        assert_eq!(steps[2].task().start_ms, Some(3000));
        assert_eq!(steps[2].manual_end_ms(), Some(4000));
        assert_eq!(steps[2].auto_end_ms(), Some(7000));

        assert!(steps[3].is_wait());
        assert_eq!(steps[3].task().start_ms, Some(4000));
        assert_eq!(steps[3].auto_end_ms(), Some(7000));

        assert_eq!(solution.total_runtime_ms(), Some(7000));
    }

    #[test]
    fn test_automatic_phases_overlap_worker() {
        // While M1 runs its long automatic phase, the worker serves M2.
        let machines = vec![
            Machine::new("M1").with_task(Task::new("A", 1000, 10_000)),
            Machine::new("M2").with_task(Task::new("C", 1000, 0)),
        ];
        let solution = Solution::new(&machines, &order(&["M1", "M2"]));

        let steps = solution.steps();
        assert_eq!(steps[0].task().start_ms, Some(0));
        assert_eq!(steps[1].task().id, "C");
        assert_eq!(steps[1].task().start_ms, Some(1000));
        // Trailing wait covers M1's automatic phase.
        assert!(steps[2].is_wait());
        assert_eq!(steps[2].auto_end_ms(), Some(11_000));
        assert_eq!(solution.total_runtime_ms(), Some(11_000));
    }

    #[test]
    fn test_manual_phases_never_overlap() {
        // Two manual-only tasks on different machines still serialise.
        let machines = vec![
            Machine::new("M1").with_task(Task::new("A", 5000, 0)),
            Machine::new("M2").with_task(Task::new("B", 5000, 0)),
        ];
        let solution = Solution::new(&machines, &order(&["M1", "M2"]));

        assert_eq!(solution.steps()[0].task().start_ms, Some(0));
        assert_eq!(solution.steps()[1].task().start_ms, Some(5000));
        assert_eq!(solution.total_runtime_ms(), Some(10_000));
    }

    #[test]
    fn test_exhausted_machine_id_is_noop() {
        let machines = vec![Machine::new("M1").with_task(Task::new("A", 1000, 0))];
        let solution = Solution::new(&machines, &order(&["M1", "M1", "M1"]));

        assert_eq!(solution.step_count(), 1);
        assert_eq!(solution.total_runtime_ms(), Some(1000));
    }

    #[test]
    fn test_unknown_machine_id_is_noop() {
        let machines = vec![Machine::new("M1").with_task(Task::new("A", 1000, 0))];
        let solution = Solution::new(&machines, &order(&["M9", "M1"]));

        assert_eq!(solution.step_count(), 1);
        assert_eq!(solution.steps()[0].machine_id(), Some("M1"));
    }

    #[test]
    fn test_empty_order() {
        let machines = vec![Machine::new("M1").with_task(Task::new("A", 1000, 0))];
        let solution = Solution::new(&machines, &[]);

        assert!(solution.steps().is_empty());
        assert_eq!(solution.total_runtime_ms(), None);
        assert_eq!(solution.current_runtime_ms(), 0);
    }

    #[test]
    fn test_simulation_does_not_mutate_input() {
        let machines = vec![Machine::new("M1").with_task(Task::new("A", 1000, 500))];
        let _ = Solution::new(&machines, &order(&["M1"]));

        assert_eq!(machines[0].tasks[0].start_ms, None);
    }

    #[test]
    fn test_determinism() {
        let machines = vec![
            Machine::new("M1")
                .with_task(Task::new("A", 2000, 1000))
                .with_task(Task::new("B", 1000, 3000)),
            Machine::new("M2").with_task(Task::new("C", 500, 4000)),
        ];
        let sequence = order(&["M1", "M2", "M1"]);

        let first = Solution::new(&machines, &sequence);
        let second = Solution::new(&machines, &sequence);

        assert_eq!(first, second);
        assert_eq!(first.total_runtime_ms(), second.total_runtime_ms());
    }

    #[test]
    fn test_total_runtime_covers_cursor() {
        let machines = vec![
            Machine::new("M1").with_task(Task::new("A", 1000, 9000)),
            Machine::new("M2").with_task(Task::new("B", 2000, 100)),
        ];
        let solution = Solution::new(&machines, &order(&["M1", "M2"]));

        let total = solution.total_runtime_ms().unwrap();
        assert!(total >= solution.current_runtime_ms());
    }

    #[test]
    fn test_steps_serialize_with_explicit_variants() {
        let machines = vec![Machine::new("M1")
            .with_task(Task::new("A", 2000, 1000))
            .with_task(Task::new("B", 1000, 3000))];
        let solution = Solution::new(&machines, &order(&["M1", "M1"]));

        let json = serde_json::to_string(&solution).unwrap();
        assert!(json.contains("\"Machine\""));
        assert!(json.contains("\"Wait\""));
        assert!(json.contains("\"machine_id\":\"M1\""));
    }
}
