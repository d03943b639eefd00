//! Indentation configuration for code generation.

use ctlegen_manifest::IndentStyle;

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    /// Spaces with the specified width (1 to 8).
    Spaces(u8),
    /// Tab character.
    #[default]
    Tab,
}

impl Indent {
    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        const SPACES: &str = "        ";
        match self {
            Self::Spaces(n) => &SPACES[..usize::from(*n).clamp(1, SPACES.len())],
            Self::Tab => "\t",
        }
    }

    /// Indentation for `depth` levels.
    pub fn repeat(&self, depth: usize) -> String {
        self.as_str().repeat(depth)
    }
}

impl From<IndentStyle> for Indent {
    fn from(style: IndentStyle) -> Self {
        match style {
            IndentStyle::Tab => Self::Tab,
            IndentStyle::Spaces(n) => Self::Spaces(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Spaces(3).as_str(), "   ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_indent_clamps_width() {
        assert_eq!(Indent::Spaces(0).as_str(), " ");
        assert_eq!(Indent::Spaces(20).as_str().len(), 8);
    }

    #[test]
    fn test_repeat() {
        assert_eq!(Indent::Tab.repeat(3), "\t\t\t");
        assert_eq!(Indent::Spaces(2).repeat(0), "");
    }

    #[test]
    fn test_default_is_tab() {
        assert_eq!(Indent::default(), Indent::Tab);
    }
}
