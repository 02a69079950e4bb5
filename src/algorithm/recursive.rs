//! Depth-first flood fill using call-stack recursion
//!
//! Each visited cell costs one stack frame along the current path, so long
//! snaking regions can exhaust the thread's stack. That is the behaviour under
//! measurement: the recursion is never flattened into an explicit stack, and
//! exhaustion is detected by a [`StackBudget`] check and reported as an error
//! that unwinds the whole traversal.

use crate::algorithm::pacing::Stepper;
use crate::algorithm::stack::{StackBudget, StackExhausted};
use crate::spatial::{CellState, Grid};

/// Fill the region reachable from the origin, depth first
///
/// Neighbours are visited down, up, right, left. Cells are marked before
/// recursing, so each is visited at most once.
///
/// # Errors
///
/// Returns [`StackExhausted`] if the recursion reaches the budget's guard zone;
/// the grid is left partially filled
pub fn fill(
    grid: &mut Grid,
    budget: &StackBudget,
    stepper: &mut Stepper<'_, '_>,
) -> Result<(), StackExhausted> {
    visit(grid, 0, 0, budget, stepper)
}

fn visit(
    grid: &mut Grid,
    row: usize,
    col: usize,
    budget: &StackBudget,
    stepper: &mut Stepper<'_, '_>,
) -> Result<(), StackExhausted> {
    budget.check()?;
    if !grid.claim(row, col, CellState::FilledRecursive) {
        return Ok(());
    }
    stepper.after_mark(grid);

    visit(grid, row + 1, col, budget, stepper)?;
    if let Some(up) = row.checked_sub(1) {
        visit(grid, up, col, budget, stepper)?;
    }
    visit(grid, row, col + 1, budget, stepper)?;
    if let Some(left) = col.checked_sub(1) {
        visit(grid, row, left, budget, stepper)?;
    }
    Ok(())
}
