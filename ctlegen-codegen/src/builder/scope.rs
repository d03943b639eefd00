//! Scoped blocks that close themselves.

use std::ops::{Deref, DerefMut};

use super::{FormattedOutput, HeaderGuard};

/// What to emit when a [`Scope`] ends.
#[derive(Debug)]
enum Close {
    Brace { flat: bool, terminator: bool },
    Tab,
    Namespace(String),
    HeaderGuard(String),
}

/// Guard for an open block.
///
/// Dereferences to the underlying [`FormattedOutput`] and emits the matching
/// close when dropped, so depth is restored on every exit path including
/// early `?` returns.
///
/// ```
/// use ctlegen_codegen::builder::{FormatOptions, FormattedOutput};
/// use ctlegen_core::LicenseHeader;
///
/// let mut out = FormattedOutput::new(FormatOptions::default(), LicenseHeader::default());
/// {
///     let mut ns = out.namespace("ctle");
///     ns.line("class status;");
/// }
/// assert_eq!(out.lines().last().unwrap(), "// namespace ctle");
/// ```
#[must_use = "the block closes as soon as the scope is dropped"]
pub struct Scope<'a> {
    out: &'a mut FormattedOutput,
    close: Close,
}

impl Deref for Scope<'_> {
    type Target = FormattedOutput;

    fn deref(&self) -> &Self::Target {
        &*self.out
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.out
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        match &self.close {
            Close::Brace {
                flat: false,
                terminator,
            } => {
                self.out.end_block(*terminator);
            }
            Close::Brace {
                flat: true,
                terminator,
            } => {
                self.out.end_flat_block(*terminator);
            }
            Close::Tab => {
                self.out.end_tab();
            }
            Close::Namespace(name) => {
                self.out.end_namespace(name);
            }
            Close::HeaderGuard(token) => {
                self.out.blank();
                self.out.end_header_guard(token);
            }
        }
    }
}

impl FormattedOutput {
    fn scope(&mut self, close: Close) -> Scope<'_> {
        Scope { out: self, close }
    }

    /// `{ ... }`
    pub fn block(&mut self) -> Scope<'_> {
        self.begin_block();
        self.scope(Close::Brace {
            flat: false,
            terminator: false,
        })
    }

    /// `{ ... };`
    pub fn terminated_block(&mut self) -> Scope<'_> {
        self.begin_block();
        self.scope(Close::Brace {
            flat: false,
            terminator: true,
        })
    }

    /// Braces without a depth change.
    pub fn flat_block(&mut self, terminator: bool) -> Scope<'_> {
        self.begin_flat_block();
        self.scope(Close::Brace {
            flat: true,
            terminator,
        })
    }

    /// Indentation only, after an optional prefix line.
    pub fn tab(&mut self, prefix: Option<&str>) -> Scope<'_> {
        self.begin_tab(prefix);
        self.scope(Close::Tab)
    }

    pub fn namespace(&mut self, name: &str) -> Scope<'_> {
        self.begin_namespace(name);
        self.scope(Close::Namespace(name.to_string()))
    }

    /// Include guard followed by a blank line; the close adds a blank line
    /// before `#endif`.
    pub fn header_guard(&mut self, guard: &HeaderGuard) -> Scope<'_> {
        let token = self.begin_header_guard(guard);
        self.blank();
        self.scope(Close::HeaderGuard(token))
    }

    /// Run `f` inside a `{ ... }` block, closing it whatever `f` returns.
    pub fn with_block<T, E>(
        &mut self,
        f: impl FnOnce(&mut FormattedOutput) -> Result<T, E>,
    ) -> Result<T, E> {
        let mut block = self.block();
        f(&mut *block)
    }
}
