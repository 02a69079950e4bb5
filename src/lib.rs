//! Flood-fill benchmark comparing stack-bound recursive and queue-driven iterative traversal
//!
//! A session freezes a randomly generated occupancy grid, runs either fill on
//! private copies of it, and records each timed outcome as a trial. Stack
//! exhaustion of the recursive fill is an expected result and is recorded as a
//! crash rather than aborting the process.

#![forbid(unsafe_code)]

/// Traversal engine and the two fill strategies
pub mod algorithm;
/// Trial ledger and aggregate statistics
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Session state machine
pub mod session;
/// Grid model and generation
pub mod spatial;

pub use io::error::{Result, SimulationError};
