//! `AndroidManifest.xml` location and edit results.

use std::path::{Path, PathBuf};

/// Manifest path relative to the project folder.
pub const MANIFEST_PATH: [&str; 4] = ["app", "src", "main", "AndroidManifest.xml"];

/// Element name of a permission declaration.
pub const USES_PERMISSION: &str = "uses-permission";

pub fn manifest_path(base: impl AsRef<Path>) -> PathBuf {
    let mut path = base.as_ref().to_path_buf();
    path.extend(MANIFEST_PATH);
    path
}

/// Outcome of adding a batch of permissions to a manifest document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestEdit {
    /// Rewritten document; `None` when nothing needed adding.
    pub content: Option<String>,
    /// Permissions appended, in request order.
    pub added: Vec<String>,
    /// Requested permissions the document already declared.
    pub already_present: Vec<String>,
}

impl ManifestEdit {
    pub fn unchanged(already_present: Vec<String>) -> Self {
        Self {
            content: None,
            added: Vec::new(),
            already_present,
        }
    }

    pub fn is_changed(&self) -> bool {
        self.content.is_some()
    }
}
