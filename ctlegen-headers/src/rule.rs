use regex::Regex;

use crate::{Error, Result};

/// Expected content of a single line.
///
/// `line` is 1-based from the top when positive and counts from the end when
/// negative (`-1` is the last line). The pattern must match the whole line;
/// `replacement` is what a fix writes in its place.
#[derive(Debug, Clone)]
pub struct LineRule {
    pub line: isize,
    pub pattern: Regex,
    pub replacement: String,
}

impl LineRule {
    /// A rule whose line must match `pattern` in full.
    pub fn new(line: isize, pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        let anchored = format!("^(?:{pattern})$");
        let pattern = Regex::new(&anchored).map_err(|source| Error::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            line,
            pattern,
            replacement: replacement.into(),
        })
    }

    /// A rule whose line must equal `text` exactly.
    pub fn exact(line: isize, text: &str) -> Result<Self> {
        Self::new(line, &regex::escape(text), text)
    }

    /// Resolve the rule's line to a 0-based index into `len` lines.
    pub fn index(&self, len: usize) -> Option<usize> {
        match self.line {
            0 => None,
            n if n > 0 => {
                let i = n.unsigned_abs() - 1;
                (i < len).then_some(i)
            }
            n => len.checked_sub(n.unsigned_abs()),
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_from_top_and_bottom() {
        let rule = |line| LineRule::exact(line, "x").unwrap();
        assert_eq!(rule(1).index(3), Some(0));
        assert_eq!(rule(3).index(3), Some(2));
        assert_eq!(rule(4).index(3), None);
        assert_eq!(rule(-1).index(3), Some(2));
        assert_eq!(rule(-3).index(3), Some(0));
        assert_eq!(rule(-4).index(3), None);
        assert_eq!(rule(0).index(3), None);
        assert_eq!(rule(-1).index(0), None);
    }

    #[test]
    fn test_exact_escapes_and_anchors() {
        let rule = LineRule::exact(1, "#ifndef _CTLE_A_H_").unwrap();
        assert!(rule.matches("#ifndef _CTLE_A_H_"));
        assert!(!rule.matches("#ifndef _CTLE_A_H_ "));
        assert!(!rule.matches("x#ifndef _CTLE_A_H_"));

        let dotted = LineRule::exact(1, "a.h").unwrap();
        assert!(!dotted.matches("a-h"));
    }

    #[test]
    fn test_pattern_matches_whole_line() {
        let rule = LineRule::new(1, r"// \d{4}|// none", "// 2024").unwrap();
        assert!(rule.matches("// 1999"));
        assert!(rule.matches("// none"));
        assert!(!rule.matches("// 1999 extra"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = LineRule::new(1, "(", "").unwrap_err();
        assert!(matches!(err, Error::Pattern { .. }));
        assert_eq!(err.to_string(), "invalid line pattern '('");
    }
}
