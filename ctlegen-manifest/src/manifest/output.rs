use serde::Deserialize;

/// `[output]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory receiving the generated headers.
    pub include_dir: String,
    /// Directory receiving the generated unit tests.
    pub tests_dir: String,
    /// Prefix prepended to every generated include-guard token.
    pub guard_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_dir: "ctle".to_string(),
            tests_dir: "unit_tests".to_string(),
            guard_prefix: String::new(),
        }
    }
}
