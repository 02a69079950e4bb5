/// Traversal engine with timing and outcome reporting
pub mod executor;
/// Breadth-first fill driven by a queue
pub mod iterative;
/// Step pacing and progress observation
pub mod pacing;
/// Depth-first fill bound to the call stack
pub mod recursive;
/// Stack consumption budget for the recursive fill
pub mod stack;

pub use executor::{FillAlgorithm, FillEngine, Outcome, RunReport, run};
pub use pacing::{Pacing, ProgressFn};
