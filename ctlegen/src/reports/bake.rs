//! Bake command report data structures.

use std::path::PathBuf;

use ctlegen_core::WriteResult;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub enum BakeReport {
    /// Files were written to (or kept on) disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    pub total: usize,
    /// Files whose content changed.
    pub written: usize,
    /// Files left untouched.
    pub skipped: usize,
}

/// Status of a single file, reported as soon as it is processed.
#[derive(Debug)]
pub struct FileStatus {
    pub path: PathBuf,
    pub result: WriteResult,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        match self {
            BakeReport::Written(written) => render_written(out, written),
            BakeReport::Preview(files) => render_preview(out, files),
        }
    }
}

impl Report for FileStatus {
    fn render(&self, out: &mut dyn Output) {
        let path = self.path.display();
        match self.result {
            WriteResult::Written => out.key_value("Writing", &path.to_string()),
            WriteResult::Skipped => {
                out.preformatted(&format!("Skipping: {path} (it is identical)"))
            }
        }
    }
}

fn render_written(out: &mut dyn Output, written: &WrittenResult) {
    out.divider("Summary");
    out.preformatted(&format!(
        "{} files in {}: {} written, {} skipped",
        written.total,
        written.output_dir.display(),
        written.written,
        written.skipped
    ));
}

fn render_preview(out: &mut dyn Output, files: &[PreviewFile]) {
    for file in files {
        out.divider(&file.path);
        out.preformatted(&file.content);
    }

    out.divider("Summary");
    out.preformatted(&format!("{} files would be generated", files.len()));
}
