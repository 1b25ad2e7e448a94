//! Error types and path context for grid generation and export

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all grid operations
///
/// `Display` names the failed step only; underlying causes are reachable
/// through [`std::error::Error::source`].
#[derive(Debug)]
pub enum GridError {
    /// Configuration value rejected before any output is produced
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Output file could not be created, written or flushed
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// JSON encoder failed while writing the document
    Serialization {
        /// Path being written
        path: PathBuf,
        /// Underlying encoder error
        source: serde_json::Error,
    },

    /// Generated document does not cover the grid exactly once
    ///
    /// Indicates a generator bug rather than bad input.
    IncompleteGrid {
        /// Coordinates with no tile
        missing: usize,
        /// Tiles repeating an already covered coordinate
        duplicates: usize,
        /// Tiles outside the configured extent
        out_of_bounds: usize,
    },
}

impl GridError {
    /// Check whether this error was raised by configuration validation
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path, operation, ..
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}'",
                    path.display()
                )
            }
            Self::Serialization { path, .. } => {
                write!(f, "Failed to serialize grid to '{}'", path.display())
            }
            Self::IncompleteGrid {
                missing,
                duplicates,
                out_of_bounds,
            } => {
                write!(
                    f,
                    "Grid coverage check failed: {missing} missing, {duplicates} duplicate, {out_of_bounds} out of bounds"
                )
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Attaches the output path to raw I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into a [`GridError::FileSystem`] naming the path
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| GridError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
