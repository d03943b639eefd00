use ctlegen_manifest::FormatConfig;

use super::Indent;

/// Formatting options for a [`FormattedOutput`](super::FormattedOutput).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub indent: Indent,
    /// Indent brace lines one extra unit (Whitesmiths style).
    pub indent_braces: bool,
    /// Indent the body of namespaces.
    pub indent_namespace: bool,
    /// Comment width in columns, not counting the `// ` marker.
    pub comment_wrap: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: Indent::Tab,
            indent_braces: false,
            indent_namespace: false,
            comment_wrap: 120,
        }
    }
}

impl From<&FormatConfig> for FormatOptions {
    fn from(config: &FormatConfig) -> Self {
        Self {
            indent: config.indent.into(),
            indent_braces: config.indent_braces,
            indent_namespace: config.indent_namespace,
            comment_wrap: config.comment_wrap,
        }
    }
}

#[cfg(test)]
mod tests {
    use ctlegen_manifest::IndentStyle;

    use super::*;

    #[test]
    fn test_default_matches_config_default() {
        assert_eq!(
            FormatOptions::from(&FormatConfig::default()),
            FormatOptions::default()
        );
    }

    #[test]
    fn test_from_config() {
        let config = FormatConfig {
            indent: IndentStyle::Spaces(4),
            indent_braces: true,
            indent_namespace: true,
            comment_wrap: 60,
        };
        let options = FormatOptions::from(&config);
        assert_eq!(options.indent, Indent::Spaces(4));
        assert!(options.indent_braces);
        assert_eq!(options.comment_wrap, 60);
    }
}
