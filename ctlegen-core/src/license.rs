//! License header configuration.

use serde::Deserialize;

/// Values written into the license header of every generated file.
///
/// Also provides the project name used when deriving header guards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LicenseHeader {
    /// Project name, e.g. `ctle`.
    pub project: String,
    /// Copyright holder, usually prefixed by the year, e.g. `2024 Ulrik Lindahl`.
    pub copyright_holder: String,
    /// License type, e.g. `MIT`.
    pub license_type: String,
    /// Link to the full license text.
    pub license_link: String,
}

impl Default for LicenseHeader {
    fn default() -> Self {
        Self {
            project: "ctle".to_string(),
            copyright_holder: "2024 Ulrik Lindahl".to_string(),
            license_type: "MIT".to_string(),
            license_link: "https://github.com/Cooolrik/ctle/blob/main/LICENSE".to_string(),
        }
    }
}

impl LicenseHeader {
    /// Apply per-call overrides on top of these values.
    pub fn merged(&self, overrides: &LicenseOverrides) -> Self {
        let pick = |value: &Option<String>, fallback: &String| {
            value.clone().unwrap_or_else(|| fallback.clone())
        };
        Self {
            project: pick(&overrides.project, &self.project),
            copyright_holder: pick(&overrides.copyright_holder, &self.copyright_holder),
            license_type: pick(&overrides.license_type, &self.license_type),
            license_link: pick(&overrides.license_link, &self.license_link),
        }
    }

    /// `<project> Copyright (c) <holder>`
    pub fn copyright_line(&self) -> String {
        format!("{} Copyright (c) {}", self.project, self.copyright_holder)
    }

    /// `Licensed under the <type> license <link>`
    pub fn license_line(&self) -> String {
        format!(
            "Licensed under the {} license {}",
            self.license_type, self.license_link
        )
    }

    /// Warning appended to generated files.
    pub fn autogen_warning(&self) -> String {
        format!(
            "Warning: This file is generated by {}. Any manual edits will be overwritten by re-generation.",
            self.project
        )
    }
}

/// Optional per-call replacements for [`LicenseHeader`] fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseOverrides {
    pub project: Option<String>,
    pub copyright_holder: Option<String>,
    pub license_type: Option<String>,
    pub license_link: Option<String>,
}

impl LicenseOverrides {
    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn copyright_holder(mut self, holder: impl Into<String>) -> Self {
        self.copyright_holder = Some(holder.into());
        self
    }

    pub fn license_type(mut self, license_type: impl Into<String>) -> Self {
        self.license_type = Some(license_type.into());
        self
    }

    pub fn license_link(mut self, link: impl Into<String>) -> Self {
        self.license_link = Some(link.into());
        self
    }
}
