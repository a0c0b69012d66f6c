// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside scaffold reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid package name '{name}': {reason}")]
    InvalidPackageName { name: String, reason: String },

    #[error("Unknown permission tier '{0}'")]
    UnknownPermissionTier(String),

    #[error("Unknown dependency strategy '{0}'")]
    UnknownDependencyStrategy(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidPackageName { name, .. } => vec![
                format!("'{}' cannot be used as a source package", name),
                "Use dot-separated segments such as com.example.app".into(),
                "Each segment must start with a letter or '_'".into(),
            ],
            Self::UnknownPermissionTier(_) => vec![
                "Known tiers: basic (1), beginner (2), intermediate (3), advanced (4)".into(),
            ],
            Self::UnknownDependencyStrategy(_) => {
                vec!["Known strategies: ask, inline, catalog, skip".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidPackageName { .. }
            | Self::UnknownPermissionTier(_)
            | Self::UnknownDependencyStrategy(_) => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
