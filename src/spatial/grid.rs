//! Occupancy grid with integer-coded cell states
//!
//! The grid is a fixed-size rectangle backed by an `ndarray` matrix. Cells are
//! addressed by `(row, col)` with `(0, 0)` at the top-left corner, and every
//! access is bounds-checked so traversals can look past the edges safely.

use ndarray::Array2;
use std::fmt;

use crate::io::error::{Result, malformed_grid};

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CellState {
    /// Traversable and not yet visited
    #[default]
    Empty = 0,
    /// Obstacle, never traversable
    Wall = 1,
    /// Visited by the depth-first fill
    FilledRecursive = 2,
    /// Visited by the breadth-first fill
    FilledIterative = 3,
}

impl CellState {
    /// Integer code of this state
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode an integer code, `None` for unknown codes
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Empty),
            1 => Some(Self::Wall),
            2 => Some(Self::FilledRecursive),
            3 => Some(Self::FilledIterative),
            _ => None,
        }
    }

    /// Whether a fill has marked this cell
    pub const fn is_filled(self) -> bool {
        matches!(self, Self::FilledRecursive | Self::FilledIterative)
    }

    const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Wall => '#',
            Self::FilledRecursive => 'r',
            Self::FilledIterative => 'i',
        }
    }
}

/// Rectangular occupancy grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<CellState>,
}

impl Grid {
    /// Create a grid with every cell empty
    ///
    /// Zero dimensions are allowed here; the generator and configuration
    /// reject them before a grid reaches a traversal.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), CellState::Empty),
        }
    }

    /// Build a grid from nested rows
    ///
    /// # Errors
    ///
    /// Returns `MalformedGrid` if there are no rows, no columns, or the rows
    /// have differing lengths
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Result<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);
        if row_count == 0 || col_count == 0 {
            return Err(malformed_grid(&"grid must have at least one cell"));
        }
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != col_count)
        {
            return Err(malformed_grid(&format!(
                "row {index} has {} cells, expected {col_count}",
                row.len()
            )));
        }

        let flat: Vec<CellState> = rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec((row_count, col_count), flat)
            .map_err(|e| malformed_grid(&e))?;
        Ok(Self { cells })
    }

    /// Build a grid from integer cell codes
    ///
    /// # Errors
    ///
    /// Returns `MalformedGrid` for unknown codes or a non-rectangular layout
    pub fn from_codes(rows: &[Vec<u8>]) -> Result<Self> {
        let decoded = rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, &code)| {
                        CellState::from_code(code).ok_or_else(|| {
                            malformed_grid(&format!("unknown cell code {code} at ({r}, {c})"))
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(decoded)
    }

    /// Get the number of rows in the grid
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Get the number of columns in the grid
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Dimensions as `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Human readable dimensions label, e.g. `25x25`
    pub fn dimensions_label(&self) -> String {
        format!("{}x{}", self.rows(), self.cols())
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell state at a position, `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        self.cells.get([row, col]).copied()
    }

    /// Overwrite a cell, returning `false` if the position is outside the grid
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> bool {
        self.cells.get_mut([row, col]).map(|cell| *cell = state).is_some()
    }

    /// Whether a position is inside the grid and still empty
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(CellState::Empty)
    }

    /// Mark a cell if it is open, reporting whether it was marked
    pub fn claim(&mut self, row: usize, col: usize, marker: CellState) -> bool {
        match self.cells.get_mut([row, col]) {
            Some(cell) if *cell == CellState::Empty => {
                *cell = marker;
                true
            }
            _ => false,
        }
    }

    /// Count cells in a given state
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Count cells marked by either fill
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_filled()).count()
    }

    /// Positions of all cells marked by either fill, in row-major order
    pub fn filled_positions(&self) -> Vec<(usize, usize)> {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_filled())
            .map(|(position, _)| position)
            .collect()
    }

    /// Cells as nested rows of integer codes
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|cell| cell.code()).collect())
            .collect()
    }

    /// Fail unless the grid has the expected dimensions
    ///
    /// # Errors
    ///
    /// Returns `MalformedGrid` describing both shapes when they differ
    pub fn ensure_dimensions(&self, rows: usize, cols: usize) -> Result<()> {
        if self.dimensions() == (rows, cols) {
            Ok(())
        } else {
            Err(malformed_grid(&format!(
                "grid is {}, configuration expects {rows}x{cols}",
                self.dimensions_label()
            )))
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let line: String = row.iter().map(|cell| cell.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
