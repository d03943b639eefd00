//! Line buffer for generating formatted C/C++ source.

use std::{fs, path::Path};

use ctlegen_core::{Error, LicenseHeader, LicenseOverrides, Result};

use super::{FormatOptions, HeaderGuard, wrap_comment};

/// Ordered buffer of output lines with a current indentation depth.
///
/// Every stored line is a single line without a terminator; text containing
/// `\n` is split before it is stored. Openers (`begin_*`) and closers
/// (`end_*`) must be balanced; the scoped forms in [`Scope`](super::Scope)
/// take care of that automatically.
///
/// ```
/// use ctlegen_codegen::builder::{FormatOptions, FormattedOutput};
/// use ctlegen_core::LicenseHeader;
///
/// let mut out = FormattedOutput::new(FormatOptions::default(), LicenseHeader::default());
/// out.line("struct point");
/// {
///     let mut body = out.terminated_block();
///     body.line("int x;");
///     body.line("int y;");
/// }
///
/// assert_eq!(out.to_text(), "struct point\n{\n\tint x;\n\tint y;\n};\n");
/// assert_eq!(out.depth(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    lines: Vec<String>,
    depth: usize,
    options: FormatOptions,
    license: LicenseHeader,
}

impl FormattedOutput {
    pub fn new(options: FormatOptions, license: LicenseHeader) -> Self {
        Self {
            lines: Vec::new(),
            depth: 0,
            options,
            license,
        }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub fn license(&self) -> &LicenseHeader {
        &self.license
    }

    /// Current indentation depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the buffer, each line followed by `\n`.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }

    // =========================================================================
    // Lines
    // =========================================================================

    fn push_at(&mut self, depth: usize, text: &str) {
        for part in text.split('\n') {
            if part.is_empty() {
                self.lines.push(String::new());
            } else {
                self.lines
                    .push(format!("{}{part}", self.options.indent.repeat(depth)));
            }
        }
    }

    /// Append a line at the current depth. Empty text gives a blank line.
    pub fn line(&mut self, text: &str) -> &mut Self {
        self.push_at(self.depth, text);
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Append a line at `depth + delta`, clamped at zero.
    ///
    /// Used for access specifiers that sit one level out from the members.
    pub fn line_adjusted(&mut self, text: &str, delta: isize) -> &mut Self {
        self.push_at(self.depth.saturating_add_signed(delta), text);
        self
    }

    /// Append a line without indentation (preprocessor directives).
    pub fn raw_line(&mut self, text: &str) -> &mut Self {
        self.lines.extend(text.split('\n').map(str::to_string));
        self
    }

    /// Append a literal multi-line block verbatim.
    ///
    /// A single leading and trailing newline are dropped so raw string
    /// literals can start and end on their own lines.
    pub fn raw_block(&mut self, text: &str) -> &mut Self {
        let text = text.strip_prefix('\n').unwrap_or(text);
        let text = text.strip_suffix('\n').unwrap_or(text);
        self.raw_line(text)
    }

    /// Append a code snippet whose nesting is written with leading tabs.
    ///
    /// Each leading tab adds one level to the current depth, so the snippet
    /// follows the configured indentation. Lines starting with `#` are
    /// emitted unindented and brace-only lines follow `indent_braces`. Outer
    /// newlines are dropped as in [`raw_block`](Self::raw_block).
    pub fn snippet(&mut self, text: &str) -> &mut Self {
        let text = text.strip_prefix('\n').unwrap_or(text);
        let text = text.strip_suffix('\n').unwrap_or(text);
        for line in text.split('\n') {
            let body = line.trim_start_matches('\t');
            let depth = self.depth + (line.len() - body.len());
            let body = body.trim_end();
            if body.is_empty() {
                self.blank();
            } else if body.starts_with('#') {
                self.raw_line(body);
            } else if matches!(body, "{" | "}" | "};") {
                let brace = format!("{}{body}", self.brace_indent());
                self.push_at(depth, &brace);
            } else {
                self.push_at(depth, body);
            }
        }
        self
    }

    /// Append already rendered lines verbatim.
    pub fn extend<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.raw_line(line.as_ref());
        }
        self
    }

    /// Append `text` to the last line.
    ///
    /// Text after an embedded newline starts new, unindented lines.
    pub fn append(&mut self, text: &str) -> Result<&mut Self> {
        let mut parts = text.split('\n');
        let last = self.lines.last_mut().ok_or(Error::EmptyBuffer)?;
        if let Some(first) = parts.next() {
            last.push_str(first);
        }
        self.lines.extend(parts.map(str::to_string));
        Ok(self)
    }

    /// Append a `//` comment wrapped at `comment_wrap` columns.
    pub fn comment(&mut self, text: &str) -> &mut Self {
        for line in wrap_comment(text, self.options.comment_wrap) {
            self.push_at(self.depth, &line);
        }
        self
    }

    /// Append `text` as one `//` line, never wrapped.
    ///
    /// Used for boilerplate lines that line-based checkers expect at fixed
    /// positions.
    pub fn comment_line(&mut self, text: &str) -> &mut Self {
        let line = match text.trim() {
            "" => "//".to_string(),
            text => format!("// {text}"),
        };
        self.push_at(self.depth, &line);
        self
    }

    /// Append a single-line `{ text }` block, optionally followed by a comma.
    pub fn block_line(&mut self, text: &str, trailing_comma: bool) -> &mut Self {
        let comma = if trailing_comma { "," } else { "" };
        let line = format!("{}{{ {text} }}{comma}", self.brace_indent());
        self.push_at(self.depth, &line);
        self
    }

    // =========================================================================
    // Blocks
    // =========================================================================

    fn brace_indent(&self) -> &'static str {
        if self.options.indent_braces {
            self.options.indent.as_str()
        } else {
            ""
        }
    }

    fn brace(&mut self, brace: &str) {
        let line = format!("{}{brace}", self.brace_indent());
        self.push_at(self.depth, &line);
    }

    /// Open a `{` block and indent one level.
    pub fn begin_block(&mut self) -> &mut Self {
        self.brace("{");
        self.depth += 1;
        self
    }

    /// Dedent and close a block with `}`, or `};` when `terminator` is set.
    pub fn end_block(&mut self, terminator: bool) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self.brace(if terminator { "};" } else { "}" });
        self
    }

    /// Open a `{` block without changing the depth.
    pub fn begin_flat_block(&mut self) -> &mut Self {
        self.brace("{");
        self
    }

    pub fn end_flat_block(&mut self, terminator: bool) -> &mut Self {
        self.brace(if terminator { "};" } else { "}" });
        self
    }

    /// Indent one level, optionally after a prefix line. No braces.
    pub fn begin_tab(&mut self, prefix: Option<&str>) -> &mut Self {
        if let Some(prefix) = prefix {
            self.line(prefix);
        }
        self.depth += 1;
        self
    }

    pub fn end_tab(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    pub fn begin_namespace(&mut self, name: &str) -> &mut Self {
        self.line(&format!("namespace {name}"));
        self.brace("{");
        self.blank();
        if self.options.indent_namespace {
            self.depth += 1;
        }
        self
    }

    pub fn end_namespace(&mut self, name: &str) -> &mut Self {
        self.blank();
        if self.options.indent_namespace {
            self.depth = self.depth.saturating_sub(1);
        }
        self.brace("}");
        self.comment(&format!("namespace {name}"))
    }

    /// Emit `#pragma once`, `#ifndef` and `#define`, returning the token.
    pub fn begin_header_guard(&mut self, guard: &HeaderGuard) -> String {
        let token = guard.token(&self.license.project);
        self.line("#pragma once");
        self.line(&format!("#ifndef {token}"));
        self.line(&format!("#define {token}"));
        token
    }

    pub fn end_header_guard(&mut self, token: &str) -> &mut Self {
        self.line(&format!("#endif//{token}"))
    }

    // =========================================================================
    // Boilerplate
    // =========================================================================

    /// Emit the license header using this buffer's license values.
    pub fn license_header(&mut self, autogen_warning: bool) -> &mut Self {
        self.license_header_with(&LicenseOverrides::default(), autogen_warning)
    }

    /// Emit the license header with individual fields overridden.
    pub fn license_header_with(
        &mut self,
        overrides: &LicenseOverrides,
        autogen_warning: bool,
    ) -> &mut Self {
        let license = self.license.merged(overrides);
        self.comment_line(&license.copyright_line());
        self.comment_line(&license.license_line());
        if autogen_warning {
            self.comment_line("");
            self.comment_line(&license.autogen_warning());
        }
        self
    }

    /// Inline another file at the current depth, right-trimming each line.
    pub fn inline_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        for line in content.lines() {
            self.line(line.trim_end());
        }
        Ok(self)
    }

    /// Push the compiler warning state and disable the listed warnings.
    pub fn push_and_disable_warnings(
        &mut self,
        msvc: &[&str],
        gcc: &[&str],
        comment: &str,
    ) -> &mut Self {
        self.comment(comment);
        self.line("#ifdef _MSC_VER");
        self.line("#pragma warning( push )");
        for warning in msvc {
            self.line(&format!("#pragma warning( disable : {warning} )"));
        }
        self.line("#elif defined(__GNUC__)");
        self.line("#pragma GCC diagnostic push");
        for warning in gcc {
            self.line(&format!("#pragma GCC diagnostic ignored \"{warning}\""));
        }
        self.line("#endif")
    }

    /// Restore the warning state saved by [`push_and_disable_warnings`](Self::push_and_disable_warnings).
    pub fn pop_warnings(&mut self, comment: &str) -> &mut Self {
        self.comment(comment);
        self.line("#ifdef _MSC_VER");
        self.line("#pragma warning( pop )");
        self.line("#elif defined(__GNUC__)");
        self.line("#pragma GCC diagnostic pop");
        self.line("#endif")
    }
}
