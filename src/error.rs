//! Application error types using thiserror
//!
//! Only project-file problems are fatal. Per-pod query failures never surface
//! here; they degrade the affected report row instead.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Podfile not found in the project directory
    #[error("Podfile not found: {path}")]
    PodfileNotFound { path: PathBuf },

    /// Podfile.lock not found in the project directory
    #[error("Podfile.lock not found: {path} (run `pod install` first)")]
    LockfileNotFound { path: PathBuf },

    /// A project file exists but could not be read
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = AppError::PodfileNotFound {
            path: PathBuf::from("/tmp/app/Podfile"),
        };
        assert!(err.to_string().contains("/tmp/app/Podfile"));

        let err = AppError::LockfileNotFound {
            path: PathBuf::from("/tmp/app/Podfile.lock"),
        };
        assert!(err.to_string().contains("pod install"));
    }

    #[test]
    fn test_read_error_carries_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AppError::ReadError {
            path: PathBuf::from("Podfile"),
            source: io,
        };
        assert!(err.to_string().contains("Podfile"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
