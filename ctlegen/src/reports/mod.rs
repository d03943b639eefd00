//! Report data structures for commands.
//!
//! Commands build reports, then render them to an [`Output`] target.

mod bake;
mod headers;
mod output;

pub use bake::{BakeReport, FileStatus, PreviewFile, WrittenResult};
pub use headers::HeadersReport;
pub use output::{Report, TerminalOutput};
