//! Error types for gantry operations.
//!
//! This module defines [`GantryError`], the fault taxonomy of a readiness
//! run, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Faults raised inside a check never abort the run: they are caught at
//!   the check boundary (or, failing that, at the runner boundary) and
//!   recorded as a single issue entry.
//! - Use `anyhow::Error` (via `GantryError::Other`) for unexpected errors
//!   in glue code.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gantry operations.
#[derive(Debug, Error)]
pub enum GantryError {
    /// A file or directory a check depends on is absent.
    #[error("Resource not found: {path}")]
    MissingResource { path: PathBuf },

    /// Structured data failed to parse.
    #[error("Failed to parse {origin}: {message}")]
    MalformedData { origin: String, message: String },

    /// An interpreter or capability could not be resolved on the host.
    #[error("Could not resolve '{name}': {message}")]
    UnresolvedDependency { name: String, message: String },

    /// The detected runtime version is below the required minimum.
    #[error("Runtime version {found} is below the required minimum {required}")]
    VersionBelowMinimum { found: String, required: String },

    /// A check failed for a reason outside its own fault handling.
    #[error("Check '{check}' failed unexpectedly: {message}")]
    CheckFailed { check: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for gantry operations.
pub type Result<T> = std::result::Result<T, GantryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_resource_displays_path() {
        let err = GantryError::MissingResource {
            path: PathBuf::from("configs/default_config.json"),
        };
        assert!(err.to_string().contains("configs/default_config.json"));
    }

    #[test]
    fn malformed_data_displays_origin_and_message() {
        let err = GantryError::MalformedData {
            origin: "configs/default_config.json".into(),
            message: "expected value at line 3".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configs/default_config.json"));
        assert!(msg.contains("line 3"));
    }

    #[test]
    fn unresolved_dependency_displays_name_and_message() {
        let err = GantryError::UnresolvedDependency {
            name: "python3".into(),
            message: "No such file or directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("python3"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn version_below_minimum_displays_both_versions() {
        let err = GantryError::VersionBelowMinimum {
            found: "3.9.2".into(),
            required: "3.10".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("3.9.2"));
        assert!(msg.contains("3.10"));
    }

    #[test]
    fn check_failed_displays_check_and_message() {
        let err = GantryError::CheckFailed {
            check: "data assets".into(),
            message: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("data assets"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GantryError = io_err.into();
        assert!(matches!(err, GantryError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts_transparently() {
        let err: GantryError = anyhow::anyhow!("glue failure").into();
        assert!(err.to_string().contains("glue failure"));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(GantryError::CheckFailed {
                check: "test".into(),
                message: "boom".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
