//! The trait implemented by code generators.

use std::path::Path;

use eyre::Result;

use crate::generation::WrittenFile;

/// A generator that renders a set of files into an output directory.
pub trait CodeGenerator {
    /// Generator identifier (e.g. "cpp")
    fn name(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_with(output_dir, &mut |_| {})
    }

    /// Generate all files, reporting each one through `on_file` as soon as it
    /// has been written or skipped
    fn generate_with(
        &self,
        output_dir: &Path,
        on_file: &mut dyn FnMut(&WrittenFile),
    ) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    /// Files whose content changed or that did not exist
    pub written: Vec<String>,
    /// Files left untouched because their content was identical
    pub skipped: Vec<String>,
}

impl GenerateResult {
    pub fn total(&self) -> usize {
        self.written.len() + self.skipped.len()
    }
}

/// A generated file for preview
#[derive(Debug, Clone)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
