//! ctlegen.toml generator used by `ctlegen init`.

use std::path::{Path, PathBuf};

use ctlegen_core::{FileRules, GeneratedFile, Overwrite};
use ctlegen_manifest::Manifest;

/// The ctlegen.toml configuration file.
pub struct CtlegenToml {
    pub manifest: Manifest,
    pub overwrite: Overwrite,
}

impl CtlegenToml {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            overwrite: Overwrite::IfMissing,
        }
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }
}

impl Default for CtlegenToml {
    fn default() -> Self {
        Self::new(Manifest::default())
    }
}

impl GeneratedFile for CtlegenToml {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(Manifest::FILE_NAME)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: self.overwrite,
        }
    }

    fn render(&self) -> ctlegen_core::Result<String> {
        Ok(self.manifest.to_template())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use ctlegen_core::WriteResult;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_written_once_and_parses() {
        let temp = TempDir::new().unwrap();
        let file = CtlegenToml::default();

        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Written);
        let path = temp.path().join("ctlegen.toml");
        let parsed = Manifest::from_file(&path).unwrap();
        assert_eq!(parsed, Manifest::default());

        fs::write(&path, "# edited\n").unwrap();
        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# edited\n");
    }

    #[test]
    fn test_forced_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ctlegen.toml");
        fs::write(&path, "# edited\n").unwrap();

        let file = CtlegenToml::default().with_overwrite(Overwrite::Always);
        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Written);
        assert!(fs::read_to_string(&path).unwrap().contains("[license]"));
    }
}
