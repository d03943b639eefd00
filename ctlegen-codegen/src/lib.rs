//! Shared code generation utilities for the ctle code generator.
//!
//! # Module Organization
//!
//! - [`builder`] - The formatted text-buffer engine ([`builder::FormattedOutput`])
//!   and its scoped blocks
//! - [`generation`] - File registry and the generated `ctlegen.toml`
//! - [`generator`] - The [`generator::CodeGenerator`] trait implemented by
//!   language back ends
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod generation;
pub mod generator;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
