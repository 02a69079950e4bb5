//! Breadth-first flood fill using an explicit queue

use std::collections::VecDeque;

use crate::algorithm::pacing::Stepper;
use crate::spatial::{CellState, Grid};

/// Fill the region reachable from the origin, breadth first
///
/// The origin is only enqueued if it is empty. Cells are marked when they are
/// enqueued, so no cell enters the queue twice and the queue never holds more
/// than `rows * cols` entries.
pub fn fill(grid: &mut Grid, stepper: &mut Stepper<'_, '_>) {
    let mut frontier = VecDeque::new();
    if !grid.claim(0, 0, CellState::FilledIterative) {
        return;
    }
    stepper.after_mark(grid);
    frontier.push_back((0usize, 0usize));

    while let Some((row, col)) = frontier.pop_front() {
        for (next_row, next_col) in neighbours(row, col) {
            if grid.claim(next_row, next_col, CellState::FilledIterative) {
                stepper.after_mark(grid);
                frontier.push_back((next_row, next_col));
            }
        }
    }
}

// Down, up, right, left; positions past the top or left edge are dropped and
// positions past the bottom or right edge fail the claim.
fn neighbours(row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    [
        Some((row + 1, col)),
        row.checked_sub(1).map(|up| (up, col)),
        Some((row, col + 1)),
        col.checked_sub(1).map(|left| (row, left)),
    ]
    .into_iter()
    .flatten()
}
