//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `droidscaff-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations and lookup
//!   - `ManifestEditor`: XML-aware permission insertion
//!
//! - **Driving (Input) Ports**: the services in `crate::application::services`,
//!   called by the CLI

pub mod output;

pub use output::{Filesystem, ManifestEditor};

#[cfg(test)]
pub use output::{MockFilesystem, MockManifestEditor};
