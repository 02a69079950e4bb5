//! Error types for grid, session and export operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all simulation operations
///
/// Stack exhaustion of the recursive fill is not an error; it is reported as
/// [`crate::algorithm::Outcome::Crash`].
#[derive(Debug)]
pub enum SimulationError {
    /// Configuration value failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Session or ledger operation invoked in the wrong state
    InvalidTransition {
        /// Operation that was attempted
        operation: &'static str,
        /// State the controller was in
        state: &'static str,
    },

    /// Grid shape does not match the configured dimensions or is not rectangular
    MalformedGrid {
        /// Description of the inconsistency
        reason: String,
    },

    /// The thread hosting the recursive fill could not be started or panicked
    WorkerFailure {
        /// Description of the failure
        reason: String,
    },

    /// Failed to encode or save an exported image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidTransition { operation, state } => {
                write!(f, "Cannot {operation} while session is {state}")
            }
            Self::MalformedGrid { reason } => {
                write!(f, "Malformed grid: {reason}")
            }
            Self::WorkerFailure { reason } => {
                write!(f, "Fill worker failed: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for simulation results
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SimulationError {
    SimulationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid transition error
pub const fn invalid_transition(operation: &'static str, state: &'static str) -> SimulationError {
    SimulationError::InvalidTransition { operation, state }
}

/// Create a malformed grid error
pub fn malformed_grid(reason: &impl ToString) -> SimulationError {
    SimulationError::MalformedGrid {
        reason: reason.to_string(),
    }
}
