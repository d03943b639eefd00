//! Bake operation - run the C++ generators.

use std::path::Path;

use ctlegen_cpp::{CodeGenerator, Generator};
use ctlegen_manifest::Manifest;
use eyre::{Context, Result};
use tracing::debug;

use crate::reports::{BakeReport, FileStatus, PreviewFile, WrittenResult};

/// Options for the bake operation.
pub struct BakeOptions<'a> {
    /// Output directory for generated code.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Run the generators. `on_file` receives each file's status as soon as it
/// has been written or skipped, so a failing run still reports what it did.
pub fn bake(
    manifest: &Manifest,
    opts: BakeOptions,
    on_file: &mut dyn FnMut(FileStatus),
) -> Result<BakeReport> {
    let generator = Generator::new(manifest);
    debug!(generator = generator.name(), dry_run = opts.dry_run, "baking");

    if opts.dry_run {
        let files = generator
            .preview()?
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        return Ok(BakeReport::Preview(files));
    }

    let result = generator
        .generate_with(opts.output_dir, &mut |file| {
            on_file(FileStatus {
                path: opts.output_dir.join(&file.path),
                result: file.result,
            })
        })
        .wrap_err("Failed to generate code")?;
    Ok(BakeReport::Written(WrittenResult {
        output_dir: opts.output_dir.to_path_buf(),
        total: result.total(),
        written: result.written.len(),
        skipped: result.skipped.len(),
    }))
}

#[cfg(test)]
mod tests {
    use ctlegen_core::WriteResult;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let report = bake(
            &Manifest::default(),
            BakeOptions {
                output_dir: temp.path(),
                dry_run: true,
            },
            &mut |_| panic!("dry run must not write"),
        )
        .unwrap();

        let BakeReport::Preview(files) = report else {
            panic!("expected a preview");
        };
        assert_eq!(files.len(), 7);
        assert_eq!(files[0].path, "ctle/status.h");
        assert!(std::fs::read_dir(temp.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_second_bake_skips_everything() {
        let temp = TempDir::new().unwrap();
        let run = |statuses: &mut Vec<FileStatus>| {
            bake(
                &Manifest::default(),
                BakeOptions {
                    output_dir: temp.path(),
                    dry_run: false,
                },
                &mut |status| statuses.push(status),
            )
            .unwrap()
        };

        let mut statuses = Vec::new();
        let BakeReport::Written(first) = run(&mut statuses) else {
            panic!("expected written files");
        };
        assert_eq!((first.total, first.written, first.skipped), (7, 7, 0));
        assert_eq!(statuses.len(), 7);
        assert_eq!(statuses[0].path, temp.path().join("ctle/status.h"));
        assert!(statuses.iter().all(|s| s.result == WriteResult::Written));

        statuses.clear();
        let BakeReport::Written(second) = run(&mut statuses) else {
            panic!("expected written files");
        };
        assert_eq!((second.written, second.skipped), (0, 7));
        assert!(statuses.iter().all(|s| s.result == WriteResult::Skipped));
    }
}
