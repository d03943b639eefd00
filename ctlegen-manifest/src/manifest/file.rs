use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// A ctlegen.toml file with both raw content and parsed manifest.
pub struct ManifestFile {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl ManifestFile {
    /// Open and parse a ctlegen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Open `explicit` when given; otherwise `ctlegen.toml` in `dir` if it
    /// exists. Returns `None` when neither applies.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Option<Self>> {
        match explicit {
            Some(path) => Self::open(path).map(Some),
            None => {
                let candidate = dir.join(Manifest::FILE_NAME);
                if candidate.is_file() {
                    Self::open(candidate).map(Some)
                } else {
                    Ok(None)
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn into_manifest(self) -> Manifest {
        self.manifest
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::Error;

    #[test]
    fn test_discover_without_file_is_none() {
        let temp = TempDir::new().unwrap();
        assert!(ManifestFile::discover(None, temp.path()).unwrap().is_none());
    }

    #[test]
    fn test_discover_finds_local_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("ctlegen.toml"),
            "[license]\nproject = \"found\"\n",
        )
        .unwrap();

        let file = ManifestFile::discover(None, temp.path()).unwrap().unwrap();
        assert_eq!(file.manifest().license.project, "found");
        assert!(file.content().contains("found"));
    }

    #[test]
    fn test_discover_explicit_missing_is_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("other.toml");
        let err = ManifestFile::discover(Some(&missing), temp.path())
            .err()
            .unwrap();
        assert!(matches!(err.as_ref(), Error::Io { .. }));
    }
}
