//! Core domain layer for droidscaff.
//!
//! Constant tables (permission tiers, dependency snippets, README text),
//! value objects, and the pure text transforms applied to a project. No
//! filesystem access happens here; that goes through the ports in
//! `crate::application::ports`.
//!
//! - **No I/O**: every function takes and returns in-memory values
//! - **Immutable tables**: `const`/`static` data, never mutated
//! - **External crates**: `thiserror`, `serde` for config-facing enums, and
//!   `regex` for the application id

pub mod build_script;
pub mod dependencies;
pub mod error;
pub mod layout;
pub mod manifest;
pub mod package;
pub mod permissions;

pub use build_script::{
    BUILD_SCRIPT_NAMES, BlockState, Injection, LineEvent, extract_application_id,
    find_dependencies_block, inject_dependencies,
};
pub use dependencies::{
    DependencySnippet, DependencyStrategy, INLINE_DEPENDENCIES, VERSION_CATALOG_ENTRIES,
    version_catalog_appendix,
};
pub use error::{DomainError, ErrorCategory};
pub use layout::{CleanArchitectureLayout, Layer};
pub use manifest::{ManifestEdit, manifest_path};
pub use package::PackageName;
pub use permissions::{ANDROID_NAMESPACE_URI, PermissionTier};
