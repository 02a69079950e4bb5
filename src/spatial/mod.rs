//! Spatial data structures
//!
//! This module contains the occupancy grid model and its random generator.

/// Random occupancy grid generation
pub mod generator;
/// Grid model and cell states
pub mod grid;

pub use generator::{generate, generate_with_rng};
pub use grid::{CellState, Grid};
