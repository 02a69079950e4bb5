//! PNG snapshots of grids

use crate::io::configuration::{
    CELL_PIXELS, EMPTY_COLOR, ITERATIVE_COLOR, RECURSIVE_COLOR, WALL_COLOR,
};
use crate::io::error::{Result, SimulationError};
use crate::spatial::{CellState, Grid};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Display colour of a cell state
pub const fn cell_color(state: CellState) -> Rgba<u8> {
    Rgba(match state {
        CellState::Empty => EMPTY_COLOR,
        CellState::Wall => WALL_COLOR,
        CellState::FilledRecursive => RECURSIVE_COLOR,
        CellState::FilledIterative => ITERATIVE_COLOR,
    })
}

/// Render a grid with each cell as a `cell_pixels` square
pub fn render_grid(grid: &Grid, cell_pixels: u32) -> RgbaImage {
    let scale = cell_pixels.max(1);
    let width = grid.cols() as u32 * scale;
    let height = grid.rows() as u32 * scale;

    RgbaImage::from_fn(width, height, |x, y| {
        let state = grid
            .get((y / scale) as usize, (x / scale) as usize)
            .unwrap_or_default();
        cell_color(state)
    })
}

/// Export a grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, output_path: &Path) -> Result<()> {
    ensure_parent_dir(output_path)?;

    render_grid(grid, CELL_PIXELS)
        .save(output_path)
        .map_err(|e| SimulationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Create the directory an output file will be written into
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be created
pub fn ensure_parent_dir(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SimulationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}
