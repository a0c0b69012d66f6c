//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `droidscaff-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::ManifestEdit;
use crate::error::DroidscaffResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `droidscaff_adapters::filesystem::LocalFilesystem` (production)
/// - `droidscaff_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing directories
    /// are not an error.
    fn create_dir_all(&self, path: &Path) -> DroidscaffResult<()>;

    /// Replace a file's content.
    fn write_file(&self, path: &Path, content: &str) -> DroidscaffResult<()>;

    /// Append to a file, creating it if needed.
    fn append_file(&self, path: &Path, content: &str) -> DroidscaffResult<()>;

    /// Read a whole UTF-8 file.
    fn read_to_string(&self, path: &Path) -> DroidscaffResult<String>;

    /// Check if a file exists.
    fn is_file(&self, path: &Path) -> bool;

    /// First file below `root` whose name is one of `file_names`.
    ///
    /// Order: at each level, files before subdirectories, each sorted by
    /// name. A missing `root` yields `Ok(None)`.
    fn find_file(
        &self,
        root: &Path,
        file_names: &'static [&'static str],
    ) -> DroidscaffResult<Option<PathBuf>>;
}

/// Port for manifest document editing.
///
/// Implemented by:
/// - `droidscaff_adapters::manifest::XmlManifestEditor` (quick-xml)
#[cfg_attr(test, mockall::automock)]
pub trait ManifestEditor: Send + Sync {
    /// Append a `uses-permission` element to the root for every entry of
    /// `permissions` not already declared.
    ///
    /// # Arguments
    ///
    /// * `document` - Full manifest text
    /// * `permissions` - Permission names in insertion order
    fn add_permissions(
        &self,
        document: &str,
        permissions: &[String],
    ) -> DroidscaffResult<ManifestEdit>;
}
