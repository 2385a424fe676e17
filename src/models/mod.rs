//! Domain models for the single-worker job shop.
//!
//! Provides the value types the solver operates on. A problem instance
//! is a set of machines, each with a fixed task queue; a solution is a
//! timeline of steps produced by simulating one visitation order.
//!
//! | Type | Role |
//! |------|------|
//! | [`Task`] | Unit of work: manual phase + automatic phase |
//! | [`Machine`] | Ordered task queue, consumed front-to-back |
//! | [`SolutionStep`] | One timeline event: execution or wait |

mod machine;
mod step;
mod task;

pub use machine::Machine;
pub use step::SolutionStep;
pub use task::Task;
