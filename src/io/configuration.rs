//! Simulation constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};
use std::time::Duration;

// Default values for configurable parameters
/// Default number of grid rows
pub const DEFAULT_ROWS: usize = 25;
/// Default number of grid columns
pub const DEFAULT_COLS: usize = 25;
/// Default obstacle density
pub const DEFAULT_DENSITY: f64 = 0.0;
/// Default pause between visited cells (0 disables pacing)
pub const DEFAULT_STEP_DELAY_MS: u64 = 0;
/// Fixed seed for reproducible grid generation
pub const DEFAULT_SEED: u64 = 42;
/// Default number of trials per algorithm
pub const DEFAULT_TRIALS: usize = 1;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Stack budget for the recursive fill worker
/// Default stack size of the recursive fill worker in KiB
pub const DEFAULT_STACK_KIB: usize = 1024;
/// Stack bytes reserved below which the recursive fill reports a crash
pub const STACK_GUARD_BYTES: usize = 64 * 1024;

/// Pause inserted before a paced run so observers can show the reset grid
pub const SETTLE_DELAY_MS: u64 = 200;

// Output settings
/// Pixels per grid cell in exported images
pub const CELL_PIXELS: u32 = 8;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// Multiplier applied to the final frame delay of an animation
pub const FINAL_FRAME_HOLD: u32 = 25;

// Cell palette
/// Colour of untouched traversable cells
pub const EMPTY_COLOR: [u8; 4] = [249, 250, 251, 255];
/// Colour of walls
pub const WALL_COLOR: [u8; 4] = [31, 41, 55, 255];
/// Colour of cells filled by the recursive algorithm
pub const RECURSIVE_COLOR: [u8; 4] = [139, 92, 246, 255];
/// Colour of cells filled by the iterative algorithm
pub const ITERATIVE_COLOR: [u8; 4] = [16, 185, 129, 255];

/// Validated parameters of one simulation setup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Number of grid rows
    pub rows: usize,
    /// Number of grid columns
    pub cols: usize,
    /// Probability of each cell except the origin being a wall
    pub density: f64,
    /// Pause after each visited cell in milliseconds
    pub step_delay_ms: u64,
    /// Stack size of the recursive fill worker in bytes
    pub stack_size: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            density: DEFAULT_DENSITY,
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
            stack_size: DEFAULT_STACK_KIB * 1024,
        }
    }
}

impl SimulationConfig {
    /// Check every field against its allowed range
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first field out of range
    pub fn validate(&self) -> Result<()> {
        validate_dimension("rows", self.rows)?;
        validate_dimension("cols", self.cols)?;
        validate_density(self.density)?;
        if self.stack_size <= STACK_GUARD_BYTES {
            return Err(invalid_parameter(
                "stack_size",
                &self.stack_size,
                &format!("must exceed the {STACK_GUARD_BYTES} byte guard zone"),
            ));
        }
        Ok(())
    }

    /// Pause between visited cells
    pub const fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    /// Human readable dimensions label, e.g. `25x25`
    pub fn dimensions_label(&self) -> String {
        format!("{}x{}", self.rows, self.cols)
    }
}

/// Validate a grid dimension
///
/// # Errors
///
/// Returns `InvalidParameter` if the value is zero or exceeds [`MAX_GRID_DIMENSION`]
pub fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be positive"));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}

/// Validate an obstacle density
///
/// # Errors
///
/// Returns `InvalidParameter` if the value is not a probability in `[0, 1]`
pub fn validate_density(density: f64) -> Result<()> {
    if (0.0..=1.0).contains(&density) {
        Ok(())
    } else {
        Err(invalid_parameter(
            "density",
            &density,
            &"must be within [0, 1]",
        ))
    }
}
