//! Application layer errors.
//!
//! These errors represent failures talking to the outside world, not
//! invalid identifiers. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The manifest could not be parsed or rewritten.
    #[error("Malformed manifest: {reason}")]
    ManifestMalformed { reason: String },

    /// A file that must exist for this operation is missing.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Store access failed (lock poisoned).
    #[error("Filesystem lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ManifestMalformed { .. } => vec![
                "AndroidManifest.xml is not well-formed XML".into(),
                "Open it in Android Studio to locate the syntax error".into(),
            ],
            Self::FileNotFound { path } => vec![
                format!("Expected a file at {}", path.display()),
                "Check that the path points at the Android project folder".into(),
            ],
            Self::LockPoisoned => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
            Self::ManifestMalformed { .. } => ErrorCategory::Validation,
            Self::FileNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}
