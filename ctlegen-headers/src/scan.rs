use std::{
    io,
    path::{Path, PathBuf},
};

use ctlegen_core::{LicenseHeader, guard_token};
use ctlegen_manifest::{HeadersConfig, Manifest};
use regex::escape;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::{LineRule, Mismatch, Result, check_file, fix_file};

/// Outcome of checking one file.
#[derive(Debug, Clone)]
pub struct FileCheck {
    pub path: PathBuf,
    /// Mismatches found before any fix.
    pub mismatches: Vec<Mismatch>,
    /// Mismatches still present afterwards; equal to `mismatches` when not fixing.
    pub remaining: Vec<Mismatch>,
}

impl FileCheck {
    pub fn passed(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn was_fixed(&self) -> bool {
        !self.mismatches.is_empty() && self.remaining.is_empty()
    }
}

/// Derives per-file line rules from the license and header settings.
#[derive(Debug, Clone)]
pub struct HeaderChecker {
    project: String,
    guard_prefix: String,
    copyright: LineRule,
    license: LineRule,
    headers: HeadersConfig,
}

impl HeaderChecker {
    pub fn new(
        license: &LicenseHeader,
        headers: &HeadersConfig,
        guard_prefix: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            project: license.project.clone(),
            guard_prefix: guard_prefix.into(),
            copyright: copyright_rule(license)?,
            license: LineRule::exact(2, &format!("// {}", license.license_line()))?,
            headers: headers.clone(),
        })
    }

    pub fn from_manifest(manifest: &Manifest) -> Result<Self> {
        Self::new(
            &manifest.license,
            &manifest.headers,
            manifest.output.guard_prefix.clone(),
        )
    }

    /// Rules for `path`, or `None` if its extension is not checked.
    pub fn rules_for(&self, path: &Path) -> Option<Result<Vec<LineRule>>> {
        let ext = path.extension()?.to_str()?;
        if !self.headers.is_checked(ext) {
            return None;
        }
        let file_name = path.file_name()?.to_str()?;
        Some(self.build_rules(file_name, self.headers.is_header(ext)))
    }

    fn build_rules(&self, file_name: &str, header: bool) -> Result<Vec<LineRule>> {
        let mut rules = vec![self.copyright.clone(), self.license.clone()];
        if header {
            let token = guard_token(&self.guard_prefix, &self.project, file_name, "");
            rules.push(LineRule::exact(3, "#pragma once")?);
            rules.push(LineRule::exact(4, &format!("#ifndef {token}"))?);
            rules.push(LineRule::exact(5, &format!("#define {token}"))?);
            rules.push(LineRule::exact(-1, &format!("#endif//{token}"))?);
        }
        Ok(rules)
    }

    pub fn check(&self, path: &Path) -> Option<Result<FileCheck>> {
        self.rules_for(path).map(|rules| -> Result<FileCheck> {
            let mismatches = check_file(path, &rules?)?;
            Ok(FileCheck {
                path: path.to_path_buf(),
                remaining: mismatches.clone(),
                mismatches,
            })
        })
    }

    pub fn fix(&self, path: &Path) -> Option<Result<FileCheck>> {
        self.rules_for(path).map(|rules| -> Result<FileCheck> {
            let rules = rules?;
            let mismatches = check_file(path, &rules)?;
            let remaining = if mismatches.is_empty() {
                Vec::new()
            } else {
                fix_file(path, &rules)?.unfixable
            };
            Ok(FileCheck {
                path: path.to_path_buf(),
                mismatches,
                remaining,
            })
        })
    }

    /// Check every file under `root` with a checked extension, in file-name order.
    pub fn scan(&self, root: &Path, fix: bool) -> Result<Vec<FileCheck>> {
        let mut checks = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                ctlegen_core::Error::io(path, io::Error::from(e))
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let result = if fix {
                self.fix(entry.path())
            } else {
                self.check(entry.path())
            };
            let Some(check) = result.transpose()? else {
                continue;
            };
            debug!(
                path = %check.path.display(),
                mismatches = check.mismatches.len(),
                "checked"
            );
            checks.push(check);
        }

        let failed = checks.iter().filter(|c| !c.passed()).count();
        info!(root = %root.display(), files = checks.len(), failed, "header scan finished");
        Ok(checks)
    }
}

/// Copyright rule; a leading four-digit year in the holder matches any year.
fn copyright_rule(license: &LicenseHeader) -> Result<LineRule> {
    let expected = format!("// {}", license.copyright_line());
    let holder = &license.copyright_holder;
    let has_year = holder.len() > 4
        && holder.as_bytes()[..4].iter().all(u8::is_ascii_digit)
        && holder.as_bytes()[4] == b' ';
    if !has_year {
        return LineRule::exact(1, &expected);
    }

    let pattern = format!(
        "{}\\d{{4}}{}",
        escape(&format!("// {} Copyright (c) ", license.project)),
        escape(&holder[4..]),
    );
    LineRule::new(1, &pattern, expected)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const LICENSE: &str = "// Licensed under the MIT license https://github.com/Cooolrik/ctle/blob/main/LICENSE";

    fn checker() -> HeaderChecker {
        HeaderChecker::new(&LicenseHeader::default(), &HeadersConfig::default(), "").unwrap()
    }

    fn header(year: &str, token: &str) -> String {
        format!(
            "// ctle Copyright (c) {year} Ulrik Lindahl\n{LICENSE}\n#pragma once\n#ifndef {token}\n#define {token}\n\nint x;\n\n#endif//{token}\n"
        )
    }

    #[test]
    fn test_copyright_accepts_any_year() {
        let rule = copyright_rule(&LicenseHeader::default()).unwrap();
        assert!(rule.matches("// ctle Copyright (c) 2024 Ulrik Lindahl"));
        assert!(rule.matches("// ctle Copyright (c) 2019 Ulrik Lindahl"));
        assert!(!rule.matches("// ctle Copyright (c) 19 Ulrik Lindahl"));
        assert!(!rule.matches("// ctle Copyright (c) 2024 Someone Else"));
        assert_eq!(rule.replacement, "// ctle Copyright (c) 2024 Ulrik Lindahl");
    }

    #[test]
    fn test_copyright_without_year_is_exact() {
        let license = LicenseHeader {
            copyright_holder: "ACME".to_string(),
            ..LicenseHeader::default()
        };
        let rule = copyright_rule(&license).unwrap();
        assert!(rule.matches("// ctle Copyright (c) ACME"));
        assert!(!rule.matches("// ctle Copyright (c) 2024 ACME"));
    }

    #[test]
    fn test_rules_by_extension() {
        let checker = checker();
        let count = |name: &str| {
            checker
                .rules_for(Path::new(name))
                .map(|rules| rules.unwrap().len())
        };
        assert_eq!(count("ctle/status.h"), Some(6));
        assert_eq!(count("ctle/_macros.inl"), Some(2));
        assert_eq!(count("unit_tests/main.cpp"), Some(2));
        assert_eq!(count("README.md"), None);
        assert_eq!(count("Makefile"), None);
    }

    #[test]
    fn test_guard_rules_use_prefix() {
        let checker =
            HeaderChecker::new(&LicenseHeader::default(), &HeadersConfig::default(), "my").unwrap();
        let rules = checker.rules_for(Path::new("ntup.h")).unwrap().unwrap();
        assert_eq!(rules[3].replacement, "#ifndef MY_CTLE_NTUP_H_");
        assert_eq!(rules[5].replacement, "#endif//MY_CTLE_NTUP_H_");
    }

    #[test]
    fn test_scan_reports_and_fixes() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("good.h"), header("2021", "_CTLE_GOOD_H_")).unwrap();
        fs::write(root.join("sub/bad.h"), header("2024", "_CTLE_OTHER_H_")).unwrap();
        fs::write(root.join("sub/short.cpp"), "int main() {}\n").unwrap();
        fs::write(root.join("notes.txt"), "not checked\n").unwrap();

        let checks = checker().scan(root, false).unwrap();
        let names: Vec<String> = checks
            .iter()
            .map(|c| c.path.strip_prefix(root).unwrap().display().to_string())
            .collect();
        assert_eq!(names, ["good.h", "sub/bad.h", "sub/short.cpp"]);
        assert!(checks[0].passed());
        assert_eq!(checks[1].mismatches.len(), 3);
        assert_eq!(checks[2].mismatches.len(), 2);

        let fixed = checker().scan(root, true).unwrap();
        assert!(fixed[1].was_fixed());
        assert_eq!(
            fs::read_to_string(root.join("sub/bad.h")).unwrap(),
            header("2024", "_CTLE_BAD_H_")
        );
        // a one-line file has a line 1 to rewrite but no line 2
        assert_eq!(fixed[2].remaining.len(), 1);
        assert!(!fixed[2].passed());

        let again = checker().scan(root, false).unwrap();
        assert!(again[0].passed() && again[1].passed());
    }

    #[test]
    fn test_scan_missing_root() {
        let dir = TempDir::new().unwrap();
        let err = checker().scan(&dir.path().join("missing"), false).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
