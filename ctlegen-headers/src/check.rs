use std::{fs, path::Path};

use ctlegen_core::{clear_read_only, set_read_only};
use tracing::debug;

use crate::{LineRule, Result};

/// A line that did not match its rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Index of the rule in the rule list.
    pub rule: usize,
    pub line: isize,
    pub expected: String,
    /// `None` when the file is too short to have the line.
    pub found: Option<String>,
}

impl Mismatch {
    /// Whether a fix can rewrite this line in place.
    pub fn is_fixable(&self) -> bool {
        self.found.is_some()
    }
}

/// Result of [`fix_file`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixOutcome {
    /// Number of lines rewritten.
    pub fixed: usize,
    /// Mismatches that could not be rewritten.
    pub unfixable: Vec<Mismatch>,
}

pub fn check_lines(lines: &[&str], rules: &[LineRule]) -> Vec<Mismatch> {
    rules
        .iter()
        .enumerate()
        .filter_map(|(i, rule)| {
            let found = rule.index(lines.len()).map(|idx| lines[idx]);
            match found {
                Some(text) if rule.matches(text) => None,
                found => Some(Mismatch {
                    rule: i,
                    line: rule.line,
                    expected: rule.replacement.clone(),
                    found: found.map(str::to_string),
                }),
            }
        })
        .collect()
}

fn read(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path).map_err(|e| ctlegen_core::Error::io(path, e))?)
}

pub fn check_file(path: &Path, rules: &[LineRule]) -> Result<Vec<Mismatch>> {
    let content = read(path)?;
    let lines: Vec<&str> = content.lines().collect();
    Ok(check_lines(&lines, rules))
}

/// Rewrite every in-range line that fails its rule with the rule's replacement.
///
/// The file is only touched when at least one line changes. A read-only file
/// is made writable for the rewrite and marked read-only again afterwards.
/// Line endings are normalised to `\n`; a trailing newline is kept if the
/// file had one.
pub fn fix_file(path: &Path, rules: &[LineRule]) -> Result<FixOutcome> {
    let content = read(path)?;
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
    let mismatches = {
        let borrowed: Vec<&str> = lines.iter().map(String::as_str).collect();
        check_lines(&borrowed, rules)
    };

    let mut outcome = FixOutcome::default();
    for mismatch in mismatches {
        match rules[mismatch.rule].index(lines.len()) {
            Some(idx) if mismatch.is_fixable() => {
                lines[idx] = mismatch.expected;
                outcome.fixed += 1;
            }
            _ => outcome.unfixable.push(mismatch),
        }
    }

    if outcome.fixed == 0 {
        return Ok(outcome);
    }

    let mut fixed = lines.join("\n");
    if content.ends_with('\n') {
        fixed.push('\n');
    }

    let read_only = fs::metadata(path)
        .map_err(|e| ctlegen_core::Error::io(path, e))?
        .permissions()
        .readonly();
    if read_only {
        clear_read_only(path)?;
    }
    fs::write(path, fixed).map_err(|e| ctlegen_core::Error::io(path, e))?;
    if read_only {
        set_read_only(path)?;
    }
    debug!(path = %path.display(), lines = outcome.fixed, "fixed header lines");

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn rules() -> Vec<LineRule> {
        vec![
            LineRule::exact(1, "// first").unwrap(),
            LineRule::exact(2, "// second").unwrap(),
            LineRule::exact(-1, "#endif//X").unwrap(),
        ]
    }

    #[test]
    fn test_check_lines_passing() {
        let lines = ["// first", "// second", "body", "#endif//X"];
        assert!(check_lines(&lines, &rules()).is_empty());
    }

    #[test]
    fn test_check_lines_reports_mismatches() {
        let lines = ["// first", "// wrong", "#endif"];
        let mismatches = check_lines(&lines, &rules());
        assert_eq!(
            mismatches,
            vec![
                Mismatch {
                    rule: 1,
                    line: 2,
                    expected: "// second".to_string(),
                    found: Some("// wrong".to_string()),
                },
                Mismatch {
                    rule: 2,
                    line: -1,
                    expected: "#endif//X".to_string(),
                    found: Some("#endif".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_check_lines_out_of_range() {
        let mismatches = check_lines(&[], &rules());
        assert_eq!(mismatches.len(), 3);
        assert!(mismatches.iter().all(|m| m.found.is_none()));
    }

    #[test]
    fn test_fix_file_rewrites_mismatching_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.h");
        fs::write(&path, "// old\n// second\nbody\n#endif\n").unwrap();

        let outcome = fix_file(&path, &rules()).unwrap();
        assert_eq!(outcome.fixed, 2);
        assert!(outcome.unfixable.is_empty());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "// first\n// second\nbody\n#endif//X\n"
        );
        assert!(check_file(&path, &rules()).unwrap().is_empty());
    }

    #[test]
    fn test_fix_file_keeps_missing_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.h");
        fs::write(&path, "// first\r\n// nope\r\n#endif//X").unwrap();

        fix_file(&path, &rules()).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "// first\n// second\n#endif//X"
        );
    }

    #[test]
    fn test_fix_file_reports_out_of_range() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.h");
        fs::write(&path, "").unwrap();

        let outcome = fix_file(&path, &rules()).unwrap();
        assert_eq!(outcome.fixed, 0);
        assert_eq!(outcome.unfixable.len(), 3);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_fix_file_leaves_passing_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.h");
        fs::write(&path, "// first\n// second\n#endif//X\n").unwrap();
        set_read_only(&path).unwrap();

        let outcome = fix_file(&path, &rules()).unwrap();
        assert_eq!(outcome, FixOutcome::default());
        assert!(fs::metadata(&path).unwrap().permissions().readonly());
    }

    #[test]
    fn test_fix_file_restores_read_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.h");
        fs::write(&path, "// first\n// x\n#endif//X\n").unwrap();
        set_read_only(&path).unwrap();

        let outcome = fix_file(&path, &rules()).unwrap();
        assert_eq!(outcome.fixed, 1);
        assert!(fs::metadata(&path).unwrap().permissions().readonly());
        assert!(check_file(&path, &rules()).unwrap().is_empty());
    }

    #[test]
    fn test_check_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = check_file(&dir.path().join("missing.h"), &rules()).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Io(ctlegen_core::Error::NotFound { .. })
        ));
    }
}
