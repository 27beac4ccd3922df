//! Error types for configuration, generation and export operations

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for all dungeon generation operations
#[derive(Debug, Error)]
pub enum DungeonError {
    /// Generation parameter validation failed
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Requested strategy name is not one of the known generators
    #[error("Unknown strategy '{name}' (expected one of: poi, maze, noise, bsp)")]
    UnknownStrategy {
        /// Name supplied by the caller
        name: String,
    },

    /// Settings file could not be read
    #[error("Failed to read settings '{}': {source}", path.display())]
    ConfigRead {
        /// Path to the settings file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Settings file is not valid settings JSON
    #[error("Failed to parse settings '{}': {source}", path.display())]
    ConfigParse {
        /// Path to the settings file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Failed to save a rendered map to disk
    #[error("Failed to export image to '{}': {source}", path.display())]
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Map could not be serialized to JSON
    #[error("Failed to serialize map: {source}")]
    Serialization {
        /// Underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, DungeonError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> DungeonError {
    DungeonError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Wrap an I/O error with the path and operation that produced it
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> DungeonError {
    DungeonError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
