//! Code generation outputs and file management.
//!
//! - [`FileRegistry`] - Declarative file registration and idempotent writing
//! - [`CtlegenToml`] - ctlegen.toml configuration file generation

mod ctlegen_toml;
mod registry;

pub use ctlegen_toml::CtlegenToml;
pub use registry::{FileEntry, FileRegistry, WrittenFile};
