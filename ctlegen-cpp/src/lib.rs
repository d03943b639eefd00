//! C++ generators for the ctle library.
//!
//! [`Generator`] renders every file through a [`ctlegen_codegen::generation::FileRegistry`];
//! the individual files live in [`files`] and the data tables they are built
//! from in [`catalog`].

pub mod catalog;
mod context;
pub mod files;
mod generator;

pub use context::CppContext;
pub use ctlegen_codegen::generator::{CodeGenerator, GenerateResult, PreviewFile};
pub use generator::Generator;
