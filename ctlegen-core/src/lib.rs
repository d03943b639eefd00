//! Core utilities and types for the ctle code generator.
//!
//! This crate provides the error taxonomy, the idempotent file writer and
//! the license configuration shared by every other ctlegen crate.

mod error;
mod file;
mod license;
mod utils;

pub use error::{Error, Result};
// File operations
pub use file::{
    File, FileRules, GeneratedFile, Overwrite, WriteResult, clear_read_only, set_read_only,
    write_if_changed,
};
pub use license::{LicenseHeader, LicenseOverrides};
// String utilities
pub use utils::{guard_token, to_define};
