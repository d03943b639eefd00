//! Settings shared by every C++ file generator.

use ctlegen_codegen::builder::{FormatOptions, FormattedOutput, HeaderGuard, Scope};
use ctlegen_core::LicenseHeader;
use ctlegen_manifest::{Manifest, OutputConfig};

/// Formatting, license and output settings resolved from a [`Manifest`].
#[derive(Debug, Clone)]
pub struct CppContext {
    options: FormatOptions,
    license: LicenseHeader,
    output: OutputConfig,
}

impl CppContext {
    pub fn new(manifest: &Manifest) -> Self {
        Self {
            options: FormatOptions::from(&manifest.format),
            license: manifest.license.clone(),
            output: manifest.output.clone(),
        }
    }

    pub fn license(&self) -> &LicenseHeader {
        &self.license
    }

    /// A fresh buffer using these settings.
    pub fn output(&self) -> FormattedOutput {
        FormattedOutput::new(self.options, self.license.clone())
    }

    pub fn guard(&self, file_name: &str) -> HeaderGuard {
        HeaderGuard::new(file_name).prefix(&self.output.guard_prefix)
    }

    /// Registry path of a generated header.
    pub fn include_path(&self, file_name: &str) -> String {
        format!("{}/{file_name}", self.output.include_dir)
    }

    /// Registry path of a generated unit-test source.
    pub fn tests_path(&self, file_name: &str) -> String {
        format!("{}/{file_name}", self.output.tests_dir)
    }

    /// Include path of a generated header as seen from the unit-test directory.
    ///
    /// One `..` is emitted per component of `tests_dir`, so nested test
    /// directories still reach the headers.
    pub fn include_from_tests(&self, file_name: &str) -> String {
        let depth = self
            .output
            .tests_dir
            .split(['/', '\\'])
            .filter(|c| !c.is_empty() && *c != ".")
            .count();
        let up = "../".repeat(depth);
        format!("{up}{}/{file_name}", self.output.include_dir)
    }

    /// Open a generated header: license lines, include guard, then the
    /// autogeneration warning. The guard closes when the scope drops.
    pub fn header<'o>(&self, out: &'o mut FormattedOutput, file_name: &str) -> Scope<'o> {
        out.license_header(false);
        let mut guard = out.header_guard(&self.guard(file_name));
        let warning = guard.license().autogen_warning();
        guard.comment_line(&warning);
        guard.blank();
        guard
    }

    /// Preamble of a generated inline or source file.
    pub fn preamble(&self, out: &mut FormattedOutput) {
        out.license_header(true);
        out.blank();
    }
}

impl Default for CppContext {
    fn default() -> Self {
        Self::new(&Manifest::default())
    }
}
