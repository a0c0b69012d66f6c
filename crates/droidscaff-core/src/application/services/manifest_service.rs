//! Manifest Service - adds permission declarations to `AndroidManifest.xml`.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, ManifestEditor},
    domain::ManifestEdit,
    error::DroidscaffResult,
};

pub struct ManifestService {
    filesystem: Box<dyn Filesystem>,
    editor: Box<dyn ManifestEditor>,
}

impl ManifestService {
    pub fn new(filesystem: Box<dyn Filesystem>, editor: Box<dyn ManifestEditor>) -> Self {
        Self { filesystem, editor }
    }

    /// Add every permission the manifest does not already declare.
    ///
    /// The file is rewritten only when at least one element was added.
    #[instrument(skip_all, fields(manifest = %manifest.display(), requested = permissions.len()))]
    pub fn add_permissions(
        &self,
        manifest: &Path,
        permissions: &[String],
    ) -> DroidscaffResult<ManifestEdit> {
        let document = self.filesystem.read_to_string(manifest)?;
        let edit = self.editor.add_permissions(&document, permissions)?;

        match &edit.content {
            Some(content) => {
                self.filesystem.write_file(manifest, content)?;
                info!(added = edit.added.len(), "Manifest updated");
            }
            None => debug!("All permissions already declared"),
        }

        Ok(edit)
    }
}
