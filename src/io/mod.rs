//! Input/output operations, configuration and error handling

/// Command-line interface and batch runner
pub mod cli;
/// Simulation constants and validated configuration
pub mod configuration;
/// Error types
pub mod error;
/// PNG snapshots of grids
pub mod image;
/// Diagnostic logging setup
pub mod logging;
/// Terminal progress display
pub mod progress;
/// Plain-text trial report
pub mod report;
/// GIF animation of paced runs
pub mod visualization;
