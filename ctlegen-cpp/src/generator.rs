use std::path::Path;

use ctlegen_codegen::{
    generation::{FileEntry, FileRegistry, WrittenFile},
    generator::{CodeGenerator, GenerateResult, PreviewFile},
};
use ctlegen_core::WriteResult;
use ctlegen_manifest::Manifest;
use eyre::{Result, WrapErr};
use tracing::info;

use crate::{
    CppContext,
    files::{CppFile, MacrosInl, NtupH, PropH, StatusH, TypesH, UndefMacrosInl, VariantsCpp},
};

/// Generator producing the ctle headers, macro files and unit-test variants.
pub struct Generator {
    ctx: CppContext,
}

impl Generator {
    pub fn new(manifest: &Manifest) -> Self {
        Self {
            ctx: CppContext::new(manifest),
        }
    }

    pub fn context(&self) -> &CppContext {
        &self.ctx
    }

    /// Render every file into a registry, in generation order.
    pub fn registry(&self) -> Result<FileRegistry> {
        let ctx = &self.ctx;
        let files: [&dyn CppFile; 7] = [
            &StatusH::new(ctx),
            &PropH::new(ctx),
            &TypesH::new(ctx),
            &NtupH::new(ctx),
            &MacrosInl::new(ctx),
            &UndefMacrosInl::new(ctx),
            &VariantsCpp::new(ctx),
        ];

        let mut registry = FileRegistry::new();
        for file in files {
            let path = file.relative_path();
            let content = file
                .render()
                .wrap_err_with(|| format!("failed to render {path}"))?;
            registry.register(FileEntry::new(path, content))?;
        }
        Ok(registry)
    }
}

impl CodeGenerator for Generator {
    fn name(&self) -> &'static str {
        "cpp"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        Ok(self.registry()?.preview())
    }

    fn generate_with(
        &self,
        output_dir: &Path,
        on_file: &mut dyn FnMut(&WrittenFile),
    ) -> Result<GenerateResult> {
        let registry = self.registry()?;
        let mut result = GenerateResult::default();

        for file in registry.write_all_with(output_dir, on_file)? {
            match file.result {
                WriteResult::Written => result.written.push(file.path),
                WriteResult::Skipped => result.skipped.push(file.path),
            }
        }

        info!(
            output = %output_dir.display(),
            written = result.written.len(),
            skipped = result.skipped.len(),
            "cpp generation finished"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        let registry = Generator::new(&Manifest::default()).registry().unwrap();
        let paths: Vec<&str> = registry.entries().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "ctle/status.h",
                "ctle/prop.h",
                "ctle/types.h",
                "ctle/ntup.h",
                "ctle/_macros.inl",
                "ctle/_undef_macros.inl",
                "unit_tests/unit_tests_variants.cpp",
            ]
        );
    }

    #[test]
    fn test_preview_matches_registry() {
        let generator = Generator::new(&Manifest::default());
        let preview = generator.preview().unwrap();
        assert_eq!(preview.len(), 7);
        assert!(preview.iter().all(|f| !f.content.is_empty()));
    }
}
