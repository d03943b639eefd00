//! Headers operation - license and include-guard checks over source roots.

use std::path::PathBuf;

use ctlegen_headers::HeaderChecker;
use ctlegen_manifest::Manifest;
use eyre::{Context, Result};
use tracing::warn;

use crate::reports::HeadersReport;

pub struct HeadersOptions<'a> {
    /// Directories to scan.
    pub roots: &'a [PathBuf],
    /// Rewrite mismatching lines.
    pub fix: bool,
}

/// Scan every root; roots that do not exist are reported and skipped.
pub fn headers(manifest: &Manifest, opts: HeadersOptions) -> Result<HeadersReport> {
    let checker =
        HeaderChecker::from_manifest(manifest).wrap_err("Invalid header configuration")?;

    let mut report = HeadersReport {
        fix: opts.fix,
        ..HeadersReport::default()
    };
    for root in opts.roots {
        if !root.is_dir() {
            warn!(root = %root.display(), "source root not found");
            report.missing_roots.push(root.clone());
            continue;
        }
        let checks = checker
            .scan(root, opts.fix)
            .wrap_err_with(|| format!("Failed to scan {}", root.display()))?;
        report.files.extend(checks);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const HEADER: &str = "// ctle Copyright (c) 2022 Ulrik Lindahl\n// Licensed under the MIT license https://github.com/Cooolrik/ctle/blob/main/LICENSE\n";

    #[test]
    fn test_missing_roots_are_skipped() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("a.cpp"), format!("{HEADER}int a;\n")).unwrap();

        let roots = [temp.path().join("missing"), src];
        let report = headers(
            &Manifest::default(),
            HeadersOptions {
                roots: &roots,
                fix: false,
            },
        )
        .unwrap();

        assert_eq!(report.missing_roots, [temp.path().join("missing")]);
        assert_eq!(report.files.len(), 1);
        assert!(report.passed());
    }

    #[test]
    fn test_failures_and_fix() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("b.inl");
        fs::write(&path, "// wrong\n// also wrong\nbody\n").unwrap();
        let roots = [temp.path().to_path_buf()];

        let check = |fix| {
            headers(&Manifest::default(), HeadersOptions { roots: &roots, fix }).unwrap()
        };

        let report = check(false);
        assert!(!report.passed());
        assert_eq!(report.failed().count(), 1);

        let fixed = check(true);
        assert!(fixed.passed());
        assert_eq!(fixed.fixed().count(), 1);
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("// ctle Copyright (c) 2024 Ulrik Lindahl\n// Licensed"));
        assert!(content.ends_with("body\n"));
        assert!(check(false).passed());
    }
}
