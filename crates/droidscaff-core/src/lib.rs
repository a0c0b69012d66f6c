//! droidscaff Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the droidscaff
//! Android scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         droidscaff-cli (CLI)            │
//! │   prompts, config, logging, output      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  ProjectLocator, ScaffoldService,       │
//! │  ManifestService, DependencyService     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Filesystem, ManifestEditor)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    droidscaff-adapters (Infrastructure) │
//! │ LocalFilesystem, XmlManifestEditor, ... │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use droidscaff_core::prelude::*;
//!
//! # fn run(filesystem: Box<dyn Filesystem>) -> DroidscaffResult<()> {
//! let package = PackageName::parse("com.example.app")?;
//! let report = ScaffoldService::new(filesystem).create_layout("./MyApp", &package);
//! assert!(report.is_complete());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DependencyService, ManifestService, ProjectLocator, ScaffoldReport, ScaffoldService,
        ports::{Filesystem, ManifestEditor},
    };
    pub use crate::domain::{
        CleanArchitectureLayout, DependencySnippet, DependencyStrategy, INLINE_DEPENDENCIES,
        Layer, ManifestEdit, PackageName, PermissionTier,
    };
    pub use crate::error::{DroidscaffError, DroidscaffResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
