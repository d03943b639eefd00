use serde::{Deserialize, Deserializer, de::Error as _};

/// Indentation used for nested scopes in generated code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndentStyle {
    #[default]
    Tab,
    /// A fixed number of spaces, 1 to 8.
    Spaces(u8),
}

impl<'de> Deserialize<'de> for IndentStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Name(String),
            Width(i64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Name(name) if name.eq_ignore_ascii_case("tab") => Ok(IndentStyle::Tab),
            Raw::Name(name) => Err(D::Error::custom(format!(
                "unknown indent '{name}', expected \"tab\" or a number of spaces"
            ))),
            Raw::Width(width) => match u8::try_from(width) {
                Ok(n @ 1..=8) => Ok(IndentStyle::Spaces(n)),
                _ => Err(D::Error::custom(format!(
                    "indent width must be between 1 and 8, got {width}"
                ))),
            },
        }
    }
}

/// `[format]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    pub indent: IndentStyle,
    /// Indent the `{` and `}` lines themselves one level.
    pub indent_braces: bool,
    /// Indent the body of namespaces.
    pub indent_namespace: bool,
    /// Maximum comment text width, excluding the `// ` marker.
    pub comment_wrap: usize,
}

impl FormatConfig {
    /// Narrowest accepted `comment_wrap`.
    pub const MIN_COMMENT_WRAP: usize = 16;
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent: IndentStyle::Tab,
            indent_braces: false,
            indent_namespace: false,
            comment_wrap: 120,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> Result<FormatConfig, toml::de::Error> {
        toml::from_str(src)
    }

    #[test]
    fn test_indent_tab() {
        assert_eq!(parse(r#"indent = "tab""#).unwrap().indent, IndentStyle::Tab);
        assert_eq!(parse(r#"indent = "Tab""#).unwrap().indent, IndentStyle::Tab);
    }

    #[test]
    fn test_indent_spaces() {
        assert_eq!(parse("indent = 4").unwrap().indent, IndentStyle::Spaces(4));
    }

    #[test]
    fn test_indent_out_of_range() {
        let err = parse("indent = 12").unwrap_err();
        assert!(err.to_string().contains("between 1 and 8"));
        assert!(parse("indent = 0").is_err());
        assert!(parse("indent = -2").is_err());
    }

    #[test]
    fn test_indent_unknown_name() {
        let err = parse(r#"indent = "spaces""#).unwrap_err();
        assert!(err.to_string().contains("unknown indent"));
    }
}
