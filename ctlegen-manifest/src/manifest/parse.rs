//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{FormatConfig, Manifest, validate::find_key_span};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, Manifest::FILE_NAME)
    }
}

impl Manifest {
    /// Parse a ctlegen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a ctlegen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, &source_ctx)?;
    Ok(manifest)
}

/// Checks serde cannot express.
fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let license = &manifest.license;
    for (key, value) in [
        ("project", &license.project),
        ("copyright_holder", &license.copyright_holder),
        ("license_type", &license.license_type),
    ] {
        if value.trim().is_empty() {
            return Err(ctx.validation_error(
                format!("license.{key} must not be empty"),
                find_key_span(ctx.src(), "license", key),
            ));
        }
    }

    if manifest.format.comment_wrap < FormatConfig::MIN_COMMENT_WRAP {
        return Err(ctx.validation_error(
            format!(
                "comment_wrap must be at least {}, got {}",
                FormatConfig::MIN_COMMENT_WRAP,
                manifest.format.comment_wrap
            ),
            find_key_span(ctx.src(), "format", "comment_wrap"),
        ));
    }

    let headers = &manifest.headers;
    if headers.extensions.is_empty() {
        return Err(ctx.validation_error(
            "headers.extensions must list at least one extension",
            find_key_span(ctx.src(), "headers", "extensions"),
        ));
    }
    if let Some(ext) = headers
        .header_extensions
        .iter()
        .find(|ext| !headers.is_checked(ext))
    {
        return Err(ctx.validation_error(
            format!("header extension '{ext}' is not listed in headers.extensions"),
            find_key_span(ctx.src(), "headers", "header_extensions"),
        ));
    }

    Ok(())
}
