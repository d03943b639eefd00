use std::path::{Path, PathBuf};

use ctlegen_codegen::builder::FormattedOutput;
use ctlegen_core::{GeneratedFile, Result};

use super::CppFile;
use crate::{
    CppContext,
    catalog::macros::{GROUPS, INCLUDED_MARKER, USAGE, all_macros},
};

fn write_preamble(ctx: &CppContext, out: &mut FormattedOutput) {
    ctx.preamble(out);
    out.raw_block(USAGE);
    out.blank();
}

/// `_macros.inl`: defines the convenience macros, refusing a second
/// inclusion without an intervening `_undef_macros.inl`.
pub struct MacrosInl<'a> {
    ctx: &'a CppContext,
}

impl<'a> MacrosInl<'a> {
    pub const FILE_NAME: &'static str = "_macros.inl";

    pub fn new(ctx: &'a CppContext) -> Self {
        Self { ctx }
    }
}

impl CppFile for MacrosInl<'_> {
    fn relative_path(&self) -> String {
        self.ctx.include_path(Self::FILE_NAME)
    }
}

impl GeneratedFile for MacrosInl<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn render(&self) -> Result<String> {
        let mut out = self.ctx.output();
        write_preamble(self.ctx, &mut out);

        out.comment(
            "Macro marker that the _macros.inl file has been included and the macros are defined. \
             Also makes sure that the _macros.inl file is not included twice, without first \
             including _undef_macros.inl before the second include.",
        );
        out.raw_line(&format!("#ifdef {INCLUDED_MARKER}"));
        out.raw_line(
            "#error The _macros.inl file is included more than once, without including \
             _undef_macros.inl to undefine the macros before the next include of _macros.inl",
        );
        out.raw_line(&format!("#endif//{INCLUDED_MARKER}"));
        out.raw_line(&format!("#define {INCLUDED_MARKER}"));
        out.blank();

        for group in GROUPS {
            for comment in group.comments {
                out.comment(comment);
            }
            for m in group.macros {
                out.raw_block(m.definition);
            }
            if group.spaced {
                out.blank();
            }
        }
        Ok(out.to_text())
    }
}

/// `_undef_macros.inl`: removes every macro defined by `_macros.inl`,
/// failing the build if one of them is missing.
pub struct UndefMacrosInl<'a> {
    ctx: &'a CppContext,
}

impl<'a> UndefMacrosInl<'a> {
    pub const FILE_NAME: &'static str = "_undef_macros.inl";

    pub fn new(ctx: &'a CppContext) -> Self {
        Self { ctx }
    }
}

impl CppFile for UndefMacrosInl<'_> {
    fn relative_path(&self) -> String {
        self.ctx.include_path(Self::FILE_NAME)
    }
}

impl GeneratedFile for UndefMacrosInl<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn render(&self) -> Result<String> {
        let mut out = self.ctx.output();
        write_preamble(self.ctx, &mut out);

        out.comment(
            "Remove the marker that _macros.inl has been included. Also make sure that \
             _macros.inl actually was included before the inclusion of _undef_macros.inl",
        );
        out.raw_line(&format!("#ifndef {INCLUDED_MARKER}"));
        out.raw_line(
            "#error The _macros.inl has not been included before including the _undef_macros.inl file.",
        );
        out.raw_line(&format!("#endif//{INCLUDED_MARKER}"));
        out.raw_line(&format!("#undef {INCLUDED_MARKER}"));
        out.blank();

        for m in all_macros() {
            let name = m.name;
            out.raw_line(&format!("#ifndef {name}"));
            out.raw_line(&format!("#error The expected macro {name} does not exist."));
            out.raw_line(&format!("#endif//{name}"));
            out.raw_line(&format!("#undef {name}"));
            out.blank();
        }
        Ok(out.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_macro_defined_and_undefined() {
        let ctx = CppContext::default();
        let defs = MacrosInl::new(&ctx).render().unwrap();
        let undefs = UndefMacrosInl::new(&ctx).render().unwrap();
        for m in all_macros() {
            assert!(defs.contains(&format!("#define {}", m.name)), "{}", m.name);
            assert!(undefs.contains(&format!(
                "#ifndef {name}\n#error The expected macro {name} does not exist.\n#endif//{name}\n#undef {name}\n",
                name = m.name
            )));
        }
    }

    #[test]
    fn test_marker_guards() {
        let ctx = CppContext::default();
        let defs = MacrosInl::new(&ctx).render().unwrap();
        let undefs = UndefMacrosInl::new(&ctx).render().unwrap();
        assert!(defs.contains("#ifdef _CTLE_MACROS_INCLUDED\n#error"));
        assert!(defs.contains("#define _CTLE_MACROS_INCLUDED\n"));
        assert!(undefs.contains("#ifndef _CTLE_MACROS_INCLUDED\n#error"));
        assert!(undefs.contains("#undef _CTLE_MACROS_INCLUDED\n"));
    }

    #[test]
    fn test_shared_preamble() {
        let ctx = CppContext::default();
        let defs = MacrosInl::new(&ctx).render().unwrap();
        let undefs = UndefMacrosInl::new(&ctx).render().unwrap();
        let preamble_len = defs.find("// Macro marker").unwrap();
        assert!(undefs.starts_with(&defs[..preamble_len]));
        assert!(defs.starts_with("// ctle Copyright (c) 2024 Ulrik Lindahl\n"));
        assert!(defs.contains("// Warning: This file is generated by ctle."));
    }

    #[test]
    fn test_multiline_macro_keeps_continuations() {
        let defs = MacrosInl::new(&CppContext::default()).render().unwrap();
        assert!(defs.contains("#define ctStatusCall( s ) \\\n\t{\\\n"));
    }
}
