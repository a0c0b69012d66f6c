//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use droidscaff_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{DroidscaffError, DroidscaffResult},
};
use tracing::debug;
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> DroidscaffResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    /// Writes to a sibling temp file and renames it over `path`, so readers
    /// never see a half-written file.
    fn write_file(&self, path: &Path, content: &str) -> DroidscaffResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut temp = tempfile::NamedTempFile::new_in(parent)
            .map_err(|e| map_io_error(path, e, "create temporary file"))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "write file"))?;

        // Keep the mode of the file being replaced.
        if let Ok(metadata) = std::fs::metadata(path) {
            temp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| map_io_error(path, e, "set permissions"))?;
        }

        temp.persist(path)
            .map_err(|e| map_io_error(path, e.error, "replace file"))?;
        Ok(())
    }

    fn append_file(&self, path: &Path, content: &str) -> DroidscaffResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| map_io_error(path, e, "open file for append"))?;
        file.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "append to file"))
    }

    fn read_to_string(&self, path: &Path) -> DroidscaffResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn find_file(
        &self,
        root: &Path,
        file_names: &'static [&'static str],
    ) -> DroidscaffResult<Option<PathBuf>> {
        if !root.is_dir() {
            debug!(root = %root.display(), "Search root is not a directory");
            return Ok(None);
        }

        // Files sort ahead of directories at each level, then by name.
        let walker = WalkDir::new(root).sort_by(|a, b| {
            a.file_type()
                .is_dir()
                .cmp(&b.file_type().is_dir())
                .then_with(|| a.file_name().cmp(b.file_name()))
        });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    // Unreadable subtrees are skipped, like a plain directory walk would.
                    debug!(error = %e, "Skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let matches = entry
                .file_name()
                .to_str()
                .is_some_and(|name| file_names.contains(&name));
            if matches {
                return Ok(Some(entry.into_path()));
            }
        }

        Ok(None)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> DroidscaffError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
