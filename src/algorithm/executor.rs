//! Traversal engine: runs one fill over a working grid and reports timing and outcome

use std::any::Any;
use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::algorithm::pacing::{Pacing, ProgressFn, Stepper};
use crate::algorithm::stack::StackBudget;
use crate::algorithm::{iterative, recursive};
use crate::io::configuration::{DEFAULT_STACK_KIB, STACK_GUARD_BYTES};
use crate::io::error::{Result, SimulationError, invalid_parameter};
use crate::spatial::{CellState, Grid};

/// Flood-fill strategy under comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FillAlgorithm {
    /// Depth-first fill bound to the call stack
    Recursive,
    /// Breadth-first fill driven by a queue
    Iterative,
}

impl FillAlgorithm {
    /// Both strategies, recursive first
    pub const ALL: [Self; 2] = [Self::Recursive, Self::Iterative];

    /// Cell state this strategy marks visited cells with
    pub const fn marker(self) -> CellState {
        match self {
            Self::Recursive => CellState::FilledRecursive,
            Self::Iterative => CellState::FilledIterative,
        }
    }

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Recursive => "Recursive",
            Self::Iterative => "Iterative",
        }
    }
}

impl fmt::Display for FillAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The traversal reached its terminal state
    Success,
    /// The recursive traversal exhausted its stack
    Crash,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Success => "Success",
            Self::Crash => "Crash",
        })
    }
}

/// Timing and outcome of one run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunReport {
    /// Strategy that ran
    pub algorithm: FillAlgorithm,
    /// Time spent traversing, excluding setup
    pub elapsed: Duration,
    /// How the run ended
    pub outcome: Outcome,
    /// Cells marked before the run ended
    pub cells_filled: usize,
}

impl RunReport {
    /// Elapsed time in fractional milliseconds
    pub const fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Runs fills with a fixed stack budget for the recursive strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillEngine {
    stack_size: usize,
}

impl Default for FillEngine {
    fn default() -> Self {
        Self {
            stack_size: DEFAULT_STACK_KIB * 1024,
        }
    }
}

impl FillEngine {
    /// Create an engine whose recursive worker gets `stack_size` bytes of stack
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the stack is not larger than the guard zone
    pub fn new(stack_size: usize) -> Result<Self> {
        if stack_size <= STACK_GUARD_BYTES {
            return Err(invalid_parameter(
                "stack_size",
                &stack_size,
                &format!("must exceed the {STACK_GUARD_BYTES} byte guard zone"),
            ));
        }
        Ok(Self { stack_size })
    }

    /// Stack size given to the recursive worker in bytes
    pub const fn stack_size(&self) -> usize {
        self.stack_size
    }

    /// Run one fill over `grid` in place
    ///
    /// With [`Pacing::Stepped`] the observer sees the grid after every marked
    /// cell. Stack exhaustion of the recursive fill is reported as
    /// [`Outcome::Crash`], not as an error.
    ///
    /// # Errors
    ///
    /// Returns `WorkerFailure` if the recursive worker thread cannot be spawned
    /// or panics (for example inside the observer)
    pub fn run(
        &self,
        algorithm: FillAlgorithm,
        grid: &mut Grid,
        pacing: Pacing,
        observer: Option<&mut ProgressFn<'_>>,
    ) -> Result<RunReport> {
        let report = match algorithm {
            FillAlgorithm::Recursive => self.run_recursive(grid, pacing, observer)?,
            FillAlgorithm::Iterative => {
                let mut stepper = Stepper::new(pacing, observer);
                let started = Instant::now();
                iterative::fill(grid, &mut stepper);
                RunReport {
                    algorithm,
                    elapsed: started.elapsed(),
                    outcome: Outcome::Success,
                    cells_filled: stepper.marked(),
                }
            }
        };

        match report.outcome {
            Outcome::Success => debug!(
                algorithm = %report.algorithm,
                elapsed_ms = report.elapsed_ms(),
                cells = report.cells_filled,
                "fill completed"
            ),
            Outcome::Crash => warn!(
                algorithm = %report.algorithm,
                elapsed_ms = report.elapsed_ms(),
                cells = report.cells_filled,
                stack_size = self.stack_size,
                "fill exhausted its stack"
            ),
        }
        Ok(report)
    }

    // The recursion runs on a scoped thread so its stack size is known to the
    // budget check; the caller blocks until it finishes.
    fn run_recursive(
        &self,
        grid: &mut Grid,
        pacing: Pacing,
        observer: Option<&mut ProgressFn<'_>>,
    ) -> Result<RunReport> {
        let stack_size = self.stack_size;
        std::thread::scope(|scope| {
            let worker = std::thread::Builder::new()
                .name("recursive-fill".to_string())
                .stack_size(stack_size)
                .spawn_scoped(scope, move || {
                    let budget = StackBudget::anchored_here(stack_size, STACK_GUARD_BYTES);
                    let mut stepper = Stepper::new(pacing, observer);
                    let started = Instant::now();
                    let result = recursive::fill(grid, &budget, &mut stepper);
                    let elapsed = started.elapsed();
                    RunReport {
                        algorithm: FillAlgorithm::Recursive,
                        elapsed,
                        outcome: if result.is_ok() {
                            Outcome::Success
                        } else {
                            Outcome::Crash
                        },
                        cells_filled: stepper.marked(),
                    }
                })
                .map_err(|e| SimulationError::WorkerFailure {
                    reason: format!("could not spawn recursive fill worker: {e}"),
                })?;

            worker
                .join()
                .map_err(|payload| SimulationError::WorkerFailure {
                    reason: format!(
                        "recursive fill worker panicked: {}",
                        panic_message(payload.as_ref())
                    ),
                })
        })
    }
}

/// Run one fill with the default engine
///
/// # Errors
///
/// Returns `WorkerFailure` if the recursive worker thread cannot be spawned or panics
pub fn run(
    algorithm: FillAlgorithm,
    grid: &mut Grid,
    pacing: Pacing,
    observer: Option<&mut ProgressFn<'_>>,
) -> Result<RunReport> {
    FillEngine::default().run(algorithm, grid, pacing, observer)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
