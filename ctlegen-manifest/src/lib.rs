// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Parsing and validation of `ctlegen.toml`.
//!
//! The manifest replaces process-wide generator defaults with one explicit
//! configuration value: license header fields, formatting options, output
//! directories and the header-checker settings.

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    FormatConfig, HeadersConfig, IndentStyle, Manifest, ManifestFile, OutputConfig,
    parse_manifest,
};
