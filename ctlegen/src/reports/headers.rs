//! Headers command report data structures.

use std::path::PathBuf;

use ctlegen_headers::{FileCheck, Mismatch};

use super::output::{Output, Report};

#[derive(Debug, Default)]
pub struct HeadersReport {
    /// Whether mismatching lines were rewritten.
    pub fix: bool,
    pub files: Vec<FileCheck>,
    /// Roots that were configured but do not exist.
    pub missing_roots: Vec<PathBuf>,
}

impl HeadersReport {
    pub fn passed(&self) -> bool {
        self.files.iter().all(FileCheck::passed)
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileCheck> {
        self.files.iter().filter(|f| !f.passed())
    }

    pub fn fixed(&self) -> impl Iterator<Item = &FileCheck> {
        self.files.iter().filter(|f| f.was_fixed())
    }
}

fn describe(mismatch: &Mismatch) -> String {
    match &mismatch.found {
        Some(found) => format!(
            "line {}: expected '{}', found '{}'",
            mismatch.line, mismatch.expected, found
        ),
        None => format!(
            "line {}: expected '{}', file is too short",
            mismatch.line, mismatch.expected
        ),
    }
}

impl Report for HeadersReport {
    fn render(&self, out: &mut dyn Output) {
        for root in &self.missing_roots {
            out.warning(&format!("{} does not exist, skipped", root.display()));
        }

        for file in self.fixed() {
            out.key_value("Fixed", &file.path.display().to_string());
        }

        for file in self.failed() {
            out.error(&file.path.display().to_string());
            for mismatch in &file.remaining {
                out.list_item(&describe(mismatch));
            }
        }

        let failed = self.failed().count();
        if failed > 0 || self.fixed().next().is_some() {
            out.newline();
        }
        out.preformatted(&format!(
            "{} files checked, {} fixed, {} failed",
            self.files.len(),
            self.fixed().count(),
            failed
        ));
        if failed > 0 && !self.fix {
            out.preformatted("run 'ctlegen headers --fix' to rewrite mismatching lines");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::Recorded;

    fn mismatch(line: isize, found: Option<&str>) -> Mismatch {
        Mismatch {
            rule: 0,
            line,
            expected: "#pragma once".to_string(),
            found: found.map(str::to_string),
        }
    }

    #[test]
    fn test_render_failures() {
        let failing = vec![mismatch(3, Some("#pragma twice")), mismatch(-1, None)];
        let report = HeadersReport {
            fix: false,
            files: vec![
                FileCheck {
                    path: PathBuf::from("ok.h"),
                    mismatches: vec![],
                    remaining: vec![],
                },
                FileCheck {
                    path: PathBuf::from("bad.h"),
                    mismatches: failing.clone(),
                    remaining: failing,
                },
            ],
            missing_roots: vec![PathBuf::from("gone")],
        };
        assert!(!report.passed());

        let mut out = Recorded::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            [
                "warning: gone does not exist, skipped",
                "error: bad.h",
                "  - line 3: expected '#pragma once', found '#pragma twice'",
                "  - line -1: expected '#pragma once', file is too short",
                "",
                "2 files checked, 0 fixed, 1 failed",
                "run 'ctlegen headers --fix' to rewrite mismatching lines",
            ]
        );
    }

    #[test]
    fn test_render_fixed() {
        let report = HeadersReport {
            fix: true,
            files: vec![FileCheck {
                path: PathBuf::from("a.h"),
                mismatches: vec![mismatch(3, Some("x"))],
                remaining: vec![],
            }],
            missing_roots: vec![],
        };
        assert!(report.passed());

        let mut out = Recorded::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            ["Fixed: a.h", "", "1 files checked, 1 fixed, 0 failed"]
        );
    }
}
