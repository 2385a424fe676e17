//! Simulation and search.
//!
//! [`Solution`] simulates one candidate visitation order into a
//! time-stamped schedule; [`Solver`] enumerates distinct orders within a
//! wall-clock budget and keeps the minimum-makespan result.

mod search;
mod solution;

pub use search::Solver;
pub use solution::Solution;
