//! Clean Architecture folder layout for an Android app module.
//!
//! Pure path arithmetic; creating anything on disk is the job of
//! `ScaffoldService`.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::package::PackageName;

/// Source root relative to the project folder.
pub const SOURCE_ROOT: [&str; 4] = ["app", "src", "main", "java"];

/// File name written into each layer folder.
pub const README_FILE: &str = "README.md";

/// One of the three Clean Architecture layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Domain,
    Data,
    Presentation,
}

impl Layer {
    pub const ALL: [Self; 3] = [Self::Domain, Self::Data, Self::Presentation];

    pub const fn dir_name(&self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Data => "data",
            Self::Presentation => "presentation",
        }
    }

    pub const fn subfolders(&self) -> &'static [&'static str] {
        match self {
            Self::Domain => &["models", "usecases"],
            Self::Data => &["repository", "local", "remote"],
            Self::Presentation => &["ui", "viewmodels"],
        }
    }

    pub const fn readme(&self) -> &'static str {
        match self {
            Self::Domain => {
                "This layer contains business logic and domain models.\n\n\
                 - `models`: Define core business objects.\n\
                 - `usecases`: Represent operations the application can perform."
            }
            Self::Data => {
                "This layer handles data operations.\n\n\
                 - `repository`: Interfaces and implementations for data access.\n\
                 - `local`: Local data sources, like Room database.\n\
                 - `remote`: Remote data sources, like APIs."
            }
            Self::Presentation => {
                "This layer manages the UI and user interaction.\n\n\
                 - `ui`: Activities, Fragments, and Composable.\n\
                 - `viewmodels`: ViewModels for managing UI-related data."
            }
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// The folders and READMEs to create for one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanArchitectureLayout {
    package_root: PathBuf,
}

impl CleanArchitectureLayout {
    pub fn new(base: impl AsRef<Path>, package: &PackageName) -> Self {
        let mut package_root = base.as_ref().to_path_buf();
        package_root.extend(SOURCE_ROOT);
        package_root.push(package.relative_path());
        Self { package_root }
    }

    /// `<base>/app/src/main/java/<package-path>`
    pub fn package_root(&self) -> &Path {
        &self.package_root
    }

    pub fn layer_dir(&self, layer: Layer) -> PathBuf {
        self.package_root.join(layer.dir_name())
    }

    /// The eleven directories in creation order: package root, then each
    /// layer followed by its subfolders.
    pub fn directories(&self) -> Vec<PathBuf> {
        let mut dirs = vec![self.package_root.clone()];
        for layer in Layer::ALL {
            let layer_dir = self.layer_dir(layer);
            let subfolders: Vec<PathBuf> =
                layer.subfolders().iter().map(|sub| layer_dir.join(sub)).collect();
            dirs.push(layer_dir);
            dirs.extend(subfolders);
        }
        dirs
    }

    /// README targets: one per layer folder, not in subfolders.
    pub fn readmes(&self) -> Vec<(PathBuf, &'static str)> {
        Layer::ALL
            .into_iter()
            .map(|layer| (self.layer_dir(layer).join(README_FILE), layer.readme()))
            .collect()
    }
}
