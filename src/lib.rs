//! Minimum-makespan sequencing for a single-worker, multi-machine shop.
//!
//! One worker tends several machines. Each machine holds a fixed queue
//! of tasks; a task needs the worker for its manual phase, then the
//! machine finishes the automatic phase unattended. The worker performs
//! one manual phase at a time, and a machine cannot start a new task
//! until its current automatic phase ends. This crate searches the space
//! of worker visitation orders for the one with the smallest makespan,
//! within a wall-clock budget (anytime: stopping early returns the best
//! order found so far).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Machine`, `SolutionStep`
//! - **`solver`**: `Solution` (single-order simulator) and `Solver`
//!   (anytime exhaustive search)
//! - **`validation`**: Input integrity checks (duplicate IDs, negative
//!   durations)
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Brucker (2007), "Scheduling Algorithms"

pub mod models;
pub mod solver;
pub mod validation;
