//! # Error Types
//!
//! Structured error types for shed_core.
//!
//! The geometry engines never fail: bad numbers are coerced and infeasible
//! doors are degraded with [`SnapEvent`](crate::walls::SnapEvent)s. Errors only
//! come from the edges of the crate, where configurations are read from disk and
//! reports are written back.
//!
//! ## Example
//!
//! ```rust
//! use shed_core::errors::{ShedError, ShedResult};
//!
//! fn check_version(found: &str) -> ShedResult<()> {
//!     if found != "0.1.0" {
//!         return Err(ShedError::version_mismatch(found, "0.1.0"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_version("9.9.9").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for shed_core operations
pub type ShedResult<T> = Result<T, ShedError>;

/// Structured error type for file and serialization operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ShedError {
    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl ShedError {
    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        ShedError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        ShedError::SerializationError { reason: reason.into() }
    }

    /// Create a VersionMismatch error
    pub fn version_mismatch(file_version: impl Into<String>, expected_version: impl Into<String>) -> Self {
        ShedError::VersionMismatch {
            file_version: file_version.into(),
            expected_version: expected_version.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ShedError::FileError { .. } => "FILE_ERROR",
            ShedError::SerializationError { .. } => "SERIALIZATION_ERROR",
            ShedError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for ShedError {
    fn from(err: serde_json::Error) -> Self {
        ShedError::serialization(err.to_string())
    }
}
