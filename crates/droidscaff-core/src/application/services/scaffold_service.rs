//! Scaffold Service - creates the Clean Architecture layout.
//!
//! Every directory and README is attempted independently. A failure is
//! recorded in the returned [`ScaffoldReport`] and the remaining entries
//! are still attempted; nothing is rolled back.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{CleanArchitectureLayout, PackageName},
    error::DroidscaffError,
};

/// What a scaffold step managed to do.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldReport {
    pub succeeded: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, DroidscaffError)>,
}

impl ScaffoldReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    fn record(&mut self, path: PathBuf, result: Result<(), DroidscaffError>) {
        match result {
            Ok(()) => self.succeeded.push(path),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Scaffold entry failed");
                self.failed.push((path, e));
            }
        }
    }
}

/// Creates folders and README files for a package.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Create the eleven layout directories. Existing ones are left as-is.
    #[instrument(skip_all, fields(base = %base.as_ref().display(), package = %package))]
    pub fn create_layout(&self, base: impl AsRef<Path>, package: &PackageName) -> ScaffoldReport {
        let layout = CleanArchitectureLayout::new(base, package);
        let mut report = ScaffoldReport::default();

        for dir in layout.directories() {
            let result = self.filesystem.create_dir_all(&dir);
            report.record(dir, result);
        }

        info!(
            created = report.succeeded.len(),
            failed = report.failed.len(),
            "Layout directories processed"
        );
        report
    }

    /// Write `README.md` into each layer folder, overwriting existing ones.
    #[instrument(skip_all, fields(base = %base.as_ref().display(), package = %package))]
    pub fn write_readmes(&self, base: impl AsRef<Path>, package: &PackageName) -> ScaffoldReport {
        let layout = CleanArchitectureLayout::new(base, package);
        let mut report = ScaffoldReport::default();

        for (path, content) in layout.readmes() {
            let result = self.filesystem.write_file(&path, content);
            report.record(path, result);
        }

        info!(written = report.succeeded.len(), "Layer READMEs processed");
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};

    fn package() -> PackageName {
        PackageName::parse("com.example.app").unwrap()
    }

    #[test]
    fn creates_all_eleven_directories() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().times(11).returning(|_| Ok(()));

        let report = ScaffoldService::new(Box::new(fs)).create_layout("/p", &package());
        assert!(report.is_complete());
        assert_eq!(report.succeeded.len(), 11);
    }

    #[test]
    fn one_failure_does_not_stop_siblings() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().times(11).returning(|p| {
            if p.ends_with("data/local") {
                Err(ApplicationError::FilesystemError {
                    path: p.to_path_buf(),
                    reason: "read-only".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });

        let report = ScaffoldService::new(Box::new(fs)).create_layout("/p", &package());
        assert_eq!(report.succeeded.len(), 10);
        assert_eq!(report.failed.len(), 1);
        assert!(report.failed[0].0.ends_with("data/local"));
    }

    #[test]
    fn readmes_written_to_layer_roots() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file()
            .times(3)
            .withf(|p, content| p.ends_with("README.md") && content.starts_with("This layer"))
            .returning(|_, _| Ok(()));

        let report = ScaffoldService::new(Box::new(fs)).write_readmes("/p", &package());
        assert_eq!(report.succeeded.len(), 3);
    }
}
