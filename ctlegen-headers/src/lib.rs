//! License-header and include-guard checking for ctle sources.
//!
//! A [`LineRule`] pins one line of a file (counted from the top, or from the
//! bottom with negative indices) to a pattern. [`HeaderChecker`] derives the
//! rules for each file from the license configuration and walks source trees,
//! optionally rewriting lines that do not match.

mod check;
mod error;
mod rule;
mod scan;

pub use check::{FixOutcome, Mismatch, check_file, check_lines, fix_file};
pub use error::{Error, Result};
pub use rule::LineRule;
pub use scan::{FileCheck, HeaderChecker};
