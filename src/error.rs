//! Error handling module for hostsbundle
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Lookups in the catalog and selector never fail; these errors cover the
//! edges of the crate: loading tables, writing the host configuration,
//! and driving the terminal.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for hostsbundle
#[derive(Error, Debug)]
pub enum BundleError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An injected catalog table violates a catalog invariant
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// The persistence collaborator failed to write the host list
    #[error("Failed to persist configuration to {path:?}: {reason}")]
    Persist { path: PathBuf, reason: String },
}

/// Result type alias for hostsbundle operations
pub type Result<T> = std::result::Result<T, BundleError>;

// Convenient error constructors
impl BundleError {
    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a persistence error for the given target path
    pub fn persist(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::Persist {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BundleError::catalog("duplicate url");
        assert_eq!(err.to_string(), "Catalog error: duplicate url");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BundleError = io_err.into();
        assert!(matches!(err, BundleError::Io(_)));
    }

    #[test]
    fn test_persist_error_names_path() {
        let err = BundleError::persist("/tmp/hosts.json", "disk full");
        let msg = err.to_string();
        assert!(msg.contains("/tmp/hosts.json"));
        assert!(msg.contains("disk full"));
    }
}
