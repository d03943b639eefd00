//! Code generation building blocks.
//!
//! - [`FormattedOutput`] - Line buffer with indentation, comment wrapping and
//!   C/C++ boilerplate helpers
//! - [`Scope`] - Guard returned by the scoped openers; emits the matching
//!   close when dropped
//! - [`FormatOptions`], [`Indent`] - Formatting configuration
//! - [`HeaderGuard`] - Include-guard description

mod formatted_output;
mod guard;
mod indent;
mod options;
mod scope;
mod wrap;

pub use formatted_output::FormattedOutput;
pub use guard::HeaderGuard;
pub use indent::Indent;
pub use options::FormatOptions;
pub use scope::Scope;
pub use wrap::wrap_comment;
