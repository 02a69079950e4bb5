//! Random occupancy grid generation

use rand::Rng;

use crate::io::configuration::{validate_density, validate_dimension};
use crate::io::error::Result;
use crate::spatial::grid::{CellState, Grid};

/// Generate a grid using the thread-local random source
///
/// # Errors
///
/// Returns `InvalidParameter` if a dimension is zero or too large, or the
/// density is outside `[0, 1]`
pub fn generate(rows: usize, cols: usize, density: f64) -> Result<Grid> {
    generate_with_rng(rows, cols, density, &mut rand::rng())
}

/// Generate a grid from the given random source
///
/// Every cell except the origin independently becomes a wall with probability
/// `density`. The origin is always left empty so a fill has somewhere to start.
///
/// # Errors
///
/// Returns `InvalidParameter` if a dimension is zero or too large, or the
/// density is outside `[0, 1]`
pub fn generate_with_rng<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    density: f64,
    rng: &mut R,
) -> Result<Grid> {
    validate_dimension("rows", rows)?;
    validate_dimension("cols", cols)?;
    validate_density(density)?;

    let mut grid = Grid::empty(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            if (row, col) == (0, 0) {
                continue;
            }
            if rng.random_bool(density) {
                grid.set(row, col, CellState::Wall);
            }
        }
    }
    Ok(grid)
}
