//! Dependency Service - inline insertion into the build script, or an
//! append to the Gradle version catalog.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{
        DependencySnippet, Injection, find_dependencies_block, inject_dependencies,
        version_catalog_appendix,
    },
    error::DroidscaffResult,
};

pub struct DependencyService {
    filesystem: Box<dyn Filesystem>,
}

impl DependencyService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// 1-based line of the first `dependencies {` line, if any.
    pub fn dependencies_block_line(&self, build_script: &Path) -> DroidscaffResult<Option<usize>> {
        let text = self.filesystem.read_to_string(build_script)?;
        Ok(find_dependencies_block(&text))
    }

    /// Insert `accepted` after the first `dependencies {` line.
    ///
    /// The script is only rewritten when something was inserted.
    #[instrument(skip_all, fields(script = %build_script.display(), accepted = accepted.len()))]
    pub fn inject_inline(
        &self,
        build_script: &Path,
        accepted: &[&DependencySnippet],
    ) -> DroidscaffResult<Injection> {
        let text = self.filesystem.read_to_string(build_script)?;
        let injection = inject_dependencies(&text, accepted);

        if injection.changed() {
            self.filesystem.write_file(build_script, &injection.content)?;
            info!(inserted = injection.inserted, "Build script updated");
        } else {
            debug!(block_found = injection.block_found, "Build script left unchanged");
        }

        Ok(injection)
    }

    /// Append the fixed catalog entries to the end of the file.
    #[instrument(skip_all, fields(catalog = %catalog.display()))]
    pub fn append_version_catalog(&self, catalog: &Path) -> DroidscaffResult<()> {
        self.filesystem
            .append_file(catalog, &version_catalog_appendix())?;
        info!("Version catalog entries appended");
        Ok(())
    }
}
