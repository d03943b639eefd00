//! Core operations.
//!
//! Business logic for ctlegen commands, separated from CLI argument parsing
//! and output rendering.

pub mod bake;
pub mod headers;

pub use bake::{BakeOptions, bake};
pub use headers::{HeadersOptions, headers};
