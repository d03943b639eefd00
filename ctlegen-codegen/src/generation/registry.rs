//! File registration pattern for declarative code generation.
//!
//! Generators render every file into a [`FileRegistry`] first and write the
//! whole set afterwards, so preview and generation share one code path.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = FileRegistry::new();
//! registry.register(FileEntry::new("ctle/status.h", status_h.render()?))?;
//! registry.register(FileEntry::new("ctle/prop.h", prop_h.render()?))?;
//!
//! for written in registry.write_all(&output_dir)? {
//!     println!("{}: {:?}", written.path, written.result);
//! }
//! ```

use std::path::{Path, PathBuf};

use ctlegen_core::{GeneratedFile, WriteResult};
use eyre::{Result, WrapErr, bail};
use indexmap::IndexMap;
use tracing::debug;

use crate::generator::PreviewFile;

/// An entry in the file registry representing a file to be generated.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Relative path from output directory, with `/` separators.
    pub path: String,
    /// File content.
    pub content: String,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

impl GeneratedFile for FileEntry {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn render(&self) -> ctlegen_core::Result<String> {
        Ok(self.content.clone())
    }
}

/// Outcome of writing one registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: String,
    pub result: WriteResult,
}

/// Registry for collecting and writing generated files.
///
/// Entries keep their registration order; each relative path may only be
/// registered once.
#[derive(Debug, Default)]
pub struct FileRegistry {
    entries: IndexMap<String, FileEntry>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file entry. Fails if the path is already registered.
    pub fn register(&mut self, entry: FileEntry) -> Result<()> {
        if self.entries.contains_key(&entry.path) {
            bail!("file '{}' is registered twice", entry.path);
        }
        self.entries.insert(entry.path.clone(), entry);
        Ok(())
    }

    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.values()
    }

    pub fn get(&self, path: &str) -> Option<&FileEntry> {
        self.entries.get(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Preview all files without touching the disk.
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.entries()
            .map(|e| PreviewFile {
                path: e.path.clone(),
                content: e.content.clone(),
            })
            .collect()
    }

    /// Write all files below `base` in registration order.
    ///
    /// Stops at the first failure; files written before it stay on disk and a
    /// re-run converges.
    pub fn write_all(&self, base: &Path) -> Result<Vec<WrittenFile>> {
        self.write_all_with(base, |_| {})
    }

    /// Like [`write_all`](Self::write_all), calling `on_file` as soon as each
    /// file has been processed.
    pub fn write_all_with(
        &self,
        base: &Path,
        mut on_file: impl FnMut(&WrittenFile),
    ) -> Result<Vec<WrittenFile>> {
        let mut written = Vec::with_capacity(self.entries.len());

        for entry in self.entries() {
            let result = entry
                .write(base)
                .wrap_err_with(|| format!("failed to write {}", entry.path))?;
            debug!(path = %entry.path, ?result, "registry entry processed");
            let file = WrittenFile {
                path: entry.path.clone(),
                result,
            };
            on_file(&file);
            written.push(file);
        }

        Ok(written)
    }
}
