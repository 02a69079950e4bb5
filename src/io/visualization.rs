//! Frame capture and GIF generation for paced runs

use crate::io::configuration::{CELL_PIXELS, FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, SimulationError, invalid_parameter};
use crate::io::image::{cell_color, ensure_parent_dir, render_grid};
use crate::spatial::{CellState, Grid};
use image::{Delay, Frame, RgbaImage};
use std::path::Path;

/// Represents a single cell change between observed grids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    /// Row of the changed cell
    pub row: usize,
    /// Column of the changed cell
    pub col: usize,
    /// New state of the cell
    pub state: CellState,
    /// Index of the observation that produced this change
    pub step: usize,
}

/// Records cell changes between observations of a running fill
///
/// Only the difference to the previous observation is stored, so long paced
/// runs keep one grid copy plus one entry per marked cell.
pub struct VisualizationCapture {
    initial: Grid,
    last: Grid,
    changes: Vec<CellChange>,
    steps: usize,
}

impl VisualizationCapture {
    /// Start capturing from the grid as it looks before the run
    pub fn new(initial: &Grid) -> Self {
        Self {
            initial: initial.clone(),
            last: initial.clone(),
            changes: Vec::new(),
            steps: 0,
        }
    }

    /// Record the differences between `grid` and the previous observation
    pub fn observe(&mut self, grid: &Grid) {
        self.steps += 1;
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let Some(state) = grid.get(row, col) else {
                    continue;
                };
                if self.last.get(row, col) != Some(state) {
                    self.last.set(row, col, state);
                    self.changes.push(CellChange {
                        row,
                        col,
                        state,
                        step: self.steps,
                    });
                }
            }
        }
    }

    /// Returns all recorded changes
    pub fn changes(&self) -> &[CellChange] {
        &self.changes
    }

    /// Returns the number of observations
    pub const fn step_count(&self) -> usize {
        self.steps
    }

    /// Export the captured run as a GIF with automatic frame skipping
    ///
    /// Frame delays below what viewers support are raised, and frames are
    /// skipped to keep the apparent animation speed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No changes were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.changes.is_empty() {
            return Err(invalid_parameter(
                "animation",
                &output_path.display(),
                &"no cell changes captured for visualization",
            ));
        }

        let requested = frame_delay_ms.max(1);
        let effective_delay_ms = requested.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if requested < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(requested) as usize
        } else {
            1
        };

        let frames = self.generate_frames(effective_delay_ms, skip_factor);

        ensure_parent_dir(output_path)?;
        let file = std::fs::File::create(output_path).map_err(|e| SimulationError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| SimulationError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })
    }

    fn generate_frames(&self, delay_ms: u32, skip_factor: usize) -> Vec<Frame> {
        let mut canvas = render_grid(&self.initial, CELL_PIXELS);
        let mut frames = vec![frame(canvas.clone(), delay_ms)];

        let mut painted_steps = 0;
        let mut current_step = 0;
        for change in &self.changes {
            if change.step != current_step {
                if current_step != 0 {
                    painted_steps += 1;
                    if painted_steps % skip_factor == 0 {
                        frames.push(frame(canvas.clone(), delay_ms));
                    }
                }
                current_step = change.step;
            }
            paint_cell(&mut canvas, change);
        }

        // Final frame displays longer for better visibility
        frames.push(frame(canvas, delay_ms.saturating_mul(FINAL_FRAME_HOLD)));
        frames
    }
}

fn paint_cell(canvas: &mut RgbaImage, change: &CellChange) {
    let color = cell_color(change.state);
    let x0 = change.col as u32 * CELL_PIXELS;
    let y0 = change.row as u32 * CELL_PIXELS;
    for y in y0..y0 + CELL_PIXELS {
        for x in x0..x0 + CELL_PIXELS {
            if x < canvas.width() && y < canvas.height() {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

fn frame(image: RgbaImage, delay_ms: u32) -> Frame {
    Frame::from_parts(image, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
}
