pub mod dependency_service;
pub mod manifest_service;
pub mod project_locator;
pub mod scaffold_service;

pub use dependency_service::DependencyService;
pub use manifest_service::ManifestService;
pub use project_locator::{APP_MODULE, ProjectLocator, VERSION_CATALOG_PATH};
pub use scaffold_service::{ScaffoldReport, ScaffoldService};
