use serde::Deserialize;

/// `[headers]` table, used by `ctlegen headers`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeadersConfig {
    /// Directories scanned for source files.
    pub roots: Vec<String>,
    /// Extensions that must carry the license header.
    pub extensions: Vec<String>,
    /// Extensions that must also carry `#pragma once` and an include guard.
    pub header_extensions: Vec<String>,
}

impl HeadersConfig {
    pub fn is_checked(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e == ext)
    }

    pub fn is_header(&self, ext: &str) -> bool {
        self.header_extensions.iter().any(|e| e == ext)
    }
}

impl Default for HeadersConfig {
    fn default() -> Self {
        let strings =
            |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        Self {
            roots: strings(&["ctle", "unit_tests"]),
            extensions: strings(&["cpp", "h", "inl"]),
            header_extensions: strings(&["h"]),
        }
    }
}
