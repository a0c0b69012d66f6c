//! Locating the files a run operates on, and reading the application id.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{BUILD_SCRIPT_NAMES, extract_application_id, manifest_path},
    error::DroidscaffResult,
};

/// Name of the app module folder under the project root.
pub const APP_MODULE: &str = "app";

/// Version catalog location relative to the project folder.
pub const VERSION_CATALOG_PATH: [&str; 2] = ["gradle", "libs.versions.toml"];

/// Finds project files below a base directory.
pub struct ProjectLocator {
    filesystem: Box<dyn Filesystem>,
}

impl ProjectLocator {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// First `build.gradle` / `build.gradle.kts` under `<base>/app`.
    #[instrument(skip_all, fields(base = %base.as_ref().display()))]
    pub fn locate_build_script(&self, base: impl AsRef<Path>) -> DroidscaffResult<Option<PathBuf>> {
        let app_dir = base.as_ref().join(APP_MODULE);
        let found = self.filesystem.find_file(&app_dir, &BUILD_SCRIPT_NAMES)?;
        debug!(found = ?found, "Build script lookup finished");
        Ok(found)
    }

    /// `Ok(None)` when the script has no `applicationId = "..."`.
    pub fn read_application_id(&self, build_script: &Path) -> DroidscaffResult<Option<String>> {
        let text = self.filesystem.read_to_string(build_script)?;
        Ok(extract_application_id(&text).map(str::to_owned))
    }

    pub fn locate_manifest(&self, base: impl AsRef<Path>) -> Option<PathBuf> {
        let path = manifest_path(base);
        self.filesystem.is_file(&path).then_some(path)
    }

    pub fn locate_version_catalog(&self, base: impl AsRef<Path>) -> Option<PathBuf> {
        let mut path = base.as_ref().to_path_buf();
        path.extend(VERSION_CATALOG_PATH);
        self.filesystem.is_file(&path).then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};

    #[test]
    fn build_script_is_searched_under_app() {
        let mut fs = MockFilesystem::new();
        fs.expect_find_file()
            .withf(|root, names| root == Path::new("/proj/app") && names.contains(&"build.gradle.kts"))
            .returning(|_, _| Ok(Some(PathBuf::from("/proj/app/build.gradle.kts"))));

        let locator = ProjectLocator::new(Box::new(fs));
        assert_eq!(
            locator.locate_build_script("/proj").unwrap(),
            Some(PathBuf::from("/proj/app/build.gradle.kts"))
        );
    }

    #[test]
    fn application_id_found_and_missing() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .withf(|p| p == Path::new("/a"))
            .returning(|_| Ok("android { applicationId = \"x.y.z\" }".into()));
        fs.expect_read_to_string()
            .withf(|p| p == Path::new("/b"))
            .returning(|_| Ok("android { namespace = \"x\" }".into()));

        let locator = ProjectLocator::new(Box::new(fs));
        assert_eq!(
            locator.read_application_id(Path::new("/a")).unwrap().as_deref(),
            Some("x.y.z")
        );
        assert_eq!(locator.read_application_id(Path::new("/b")).unwrap(), None);
    }

    #[test]
    fn unreadable_script_is_an_error_not_absence() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string().returning(|p| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });

        let locator = ProjectLocator::new(Box::new(fs));
        assert!(locator.read_application_id(Path::new("/a")).is_err());
    }

    #[test]
    fn manifest_only_reported_when_present() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_file()
            .returning(|p| p.ends_with("app/src/main/AndroidManifest.xml"));

        let locator = ProjectLocator::new(Box::new(fs));
        assert!(locator.locate_manifest("/proj").is_some());
        assert!(locator.locate_version_catalog("/proj").is_none());
    }
}
