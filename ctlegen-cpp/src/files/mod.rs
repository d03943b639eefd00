//! One type per generated C++ file.

use ctlegen_core::GeneratedFile;

mod macros_inl;
mod ntup_h;
mod prop_h;
mod status_h;
mod types_h;
mod variants_cpp;

pub use macros_inl::{MacrosInl, UndefMacrosInl};
pub use ntup_h::NtupH;
pub use prop_h::PropH;
pub use status_h::StatusH;
pub use types_h::TypesH;
pub use variants_cpp::VariantsCpp;

/// A generated C++ file, addressed relative to the output root.
pub trait CppFile: GeneratedFile {
    /// Path relative to the output root, `/`-separated.
    fn relative_path(&self) -> String;
}
