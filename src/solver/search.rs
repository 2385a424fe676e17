//! Anytime exhaustive search over visitation orders.
//!
//! Enumerates permutations of the machine-slot sequence lazily,
//! deduplicates visible orders, simulates each within a wall-clock
//! budget, and tracks the best makespan found. Stopping early always
//! yields the best result seen so far.
//!
//! # Complexity
//! O(s! / Π mᵢ!) distinct orders for s slots where machine i holds mᵢ
//! tasks; the budget bounds how much of that space is visited.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use itertools::Itertools;
use log::{debug, info};

use super::Solution;
use crate::models::Machine;

/// Exhaustive minimum-makespan search with a wall-clock budget.
///
/// One solver instance runs one search; calling [`solve`](Self::solve)
/// again discards accumulated solutions and restarts the clock.
///
/// # Example
///
/// ```
/// use shop_sequencer::models::{Machine, Task};
/// use shop_sequencer::solver::Solver;
///
/// let machines = vec![Machine::new("M1")
///     .with_task(Task::new("A", 2000, 1000))
///     .with_task(Task::new("B", 1000, 3000))];
///
/// let mut solver = Solver::new(machines);
/// let best = solver.solve().unwrap();
/// assert_eq!(best.total_runtime_ms(), Some(7000));
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    machines: Vec<Machine>,
    max_runtime: Option<Duration>,
    run_start_at: Option<Instant>,
    solutions: Vec<Solution>,
    best_index: Option<usize>,
}

impl Solver {
    /// Creates a solver with no time budget (runs to exhaustion).
    pub fn new(machines: Vec<Machine>) -> Self {
        Self {
            machines,
            max_runtime: None,
            run_start_at: None,
            solutions: Vec::new(),
            best_index: None,
        }
    }

    /// Sets the search budget. The deadline is checked before each
    /// candidate is drawn from the permutation generator.
    pub fn with_max_runtime(mut self, budget: Duration) -> Self {
        self.max_runtime = Some(budget);
        self
    }

    /// Runs the search and returns the best solution found, if any.
    ///
    /// Enumerates distinct visitation orders until the generator is
    /// exhausted or the deadline elapses. Ties on makespan are broken by
    /// discovery order: the earliest-found minimum wins.
    ///
    /// Returns `None` when no candidate was simulated — an empty
    /// instance, or a deadline that fired before the first candidate.
    pub fn solve(&mut self) -> Option<&Solution> {
        self.solutions.clear();
        self.best_index = None;
        self.run_start_at = Some(Instant::now());

        let base_order = self.base_visitation_order();
        if base_order.is_empty() {
            info!("search finished: empty instance, no candidates");
            return None;
        }

        let slot_count = base_order.len();
        let mut seen: HashSet<Vec<String>> = HashSet::new();
        let mut best_runtime: Option<i64> = None;
        let mut candidates = base_order.into_iter().permutations(slot_count);

        loop {
            if !self.within_budget() {
                info!(
                    "search budget elapsed after {} candidates",
                    self.solutions.len()
                );
                break;
            }
            let Some(order) = candidates.next() else {
                info!(
                    "search space exhausted after {} candidates",
                    self.solutions.len()
                );
                break;
            };
            // Repeated ids from multi-task machines make the generator
            // emit duplicate visible sequences; simulate each once.
            if !seen.insert(order.clone()) {
                continue;
            }

            let solution = Solution::new(&self.machines, &order);
            let runtime = solution.total_runtime_ms();
            self.solutions.push(solution);

            let improved = match (runtime, best_runtime) {
                (Some(candidate), Some(best)) => candidate < best,
                (Some(_), None) => true,
                (None, _) => false,
            };
            if improved {
                best_runtime = runtime;
                self.best_index = Some(self.solutions.len() - 1);
                debug!(
                    "new incumbent: makespan {} ms (candidate #{})",
                    runtime.unwrap_or(0),
                    self.solutions.len()
                );
            }
        }

        self.best_solution()
    }

    /// Best solution found by the last [`solve`](Self::solve) run.
    pub fn best_solution(&self) -> Option<&Solution> {
        self.best_index.and_then(|index| self.solutions.get(index))
    }

    /// All solutions simulated by the last run, in discovery order.
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Number of distinct candidate orders simulated by the last run.
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    /// The problem instance this solver searches.
    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    /// The flat slot sequence permuted by the search: each machine's id
    /// repeated once per queued task.
    fn base_visitation_order(&self) -> Vec<String> {
        self.machines
            .iter()
            .flat_map(|machine| vec![machine.id.clone(); machine.slot_count()])
            .collect()
    }

    fn within_budget(&self) -> bool {
        match (self.max_runtime, self.run_start_at) {
            (Some(budget), Some(start)) => start.elapsed() < budget,
            _ => true,
        }
    }
}
