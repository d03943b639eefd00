//! Manifest types and parsing for ctlegen.toml files.

mod file;
mod format;
mod headers;
mod output;
mod parse;
mod validate;

use ctlegen_core::LicenseHeader;
pub use file::ManifestFile;
pub use format::{FormatConfig, IndentStyle};
pub use headers::HeadersConfig;
pub use output::OutputConfig;
pub use parse::parse_manifest;
use serde::Deserialize;

/// Root manifest for ctlegen.toml.
///
/// Every table is optional; a missing table takes its defaults, so an empty
/// file describes the stock ctle generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// License header written at the top of every generated file
    pub license: LicenseHeader,

    /// Formatting of generated source
    pub format: FormatConfig,

    /// Output directories relative to the output root
    pub output: OutputConfig,

    /// Header checker settings
    pub headers: HeadersConfig,
}

impl Manifest {
    /// Default file name searched for in the working directory.
    pub const FILE_NAME: &'static str = "ctlegen.toml";

    /// Render a commented ctlegen.toml describing this manifest.
    pub fn to_template(&self) -> String {
        let indent = match self.format.indent {
            IndentStyle::Tab => "\"tab\"".to_string(),
            IndentStyle::Spaces(n) => n.to_string(),
        };
        let list = |items: &[String]| {
            let quoted: Vec<String> = items.iter().map(|s| format!("\"{s}\"")).collect();
            format!("[{}]", quoted.join(", "))
        };

        format!(
            r#"# ctlegen configuration

[license]
project = "{project}"
copyright_holder = "{holder}"
license_type = "{license_type}"
license_link = "{license_link}"

[format]
# "tab" or a number of spaces (1-8)
indent = {indent}
indent_braces = {indent_braces}
indent_namespace = {indent_namespace}
# maximum comment width, excluding the "// " marker
comment_wrap = {comment_wrap}

[output]
include_dir = "{include_dir}"
tests_dir = "{tests_dir}"
guard_prefix = "{guard_prefix}"

[headers]
roots = {roots}
extensions = {extensions}
header_extensions = {header_extensions}
"#,
            project = self.license.project,
            holder = self.license.copyright_holder,
            license_type = self.license.license_type,
            license_link = self.license.license_link,
            indent_braces = self.format.indent_braces,
            indent_namespace = self.format.indent_namespace,
            comment_wrap = self.format.comment_wrap,
            include_dir = self.output.include_dir,
            tests_dir = self.output.tests_dir,
            guard_prefix = self.output.guard_prefix,
            roots = list(&self.headers.roots),
            extensions = list(&self.headers.extensions),
            header_extensions = list(&self.headers.header_extensions),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_manifest_uses_defaults() {
        let manifest: Manifest = "".parse().unwrap();
        assert_eq!(manifest, Manifest::default());
        assert_eq!(manifest.license.project, "ctle");
        assert_eq!(manifest.output.include_dir, "ctle");
    }

    #[test]
    fn test_template_parses_back_to_same_manifest() {
        let manifest = Manifest::default();
        let parsed: Manifest = manifest.to_template().parse().unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_template_keeps_custom_values() {
        let mut manifest = Manifest::default();
        manifest.license.project = "mylib".into();
        manifest.format.indent = IndentStyle::Spaces(4);

        let parsed: Manifest = manifest.to_template().parse().unwrap();
        assert_eq!(parsed.license.project, "mylib");
        assert_eq!(parsed.format.indent, IndentStyle::Spaces(4));
    }

    #[test]
    fn test_unknown_table_is_rejected() {
        let result: crate::Result<Manifest> = "[plugins]\nx = 1\n".parse();
        assert!(matches!(result.unwrap_err().as_ref(), crate::Error::Parse { .. }));
    }
}
