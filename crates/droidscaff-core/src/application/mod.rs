//! Application layer for droidscaff.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProjectLocator, ScaffoldService,
//!   ManifestService, DependencyService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Services take already-resolved decisions (a package name, a permission
//! list, the accepted snippets). Asking the operator is the CLI's job.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    DependencyService, ManifestService, ProjectLocator, ScaffoldReport, ScaffoldService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ManifestEditor};

pub use error::ApplicationError;
