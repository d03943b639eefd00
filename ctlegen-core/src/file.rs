use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{Error, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content
    fn render(&self) -> Result<String>;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        write_with_rules(&path, self.rules(), || self.render())
    }
}

fn write_with_rules(
    path: &Path,
    rules: FileRules,
    render: impl FnOnce() -> Result<String>,
) -> Result<WriteResult> {
    match rules.overwrite {
        Overwrite::IfChanged => write_if_changed(path, &render()?),
        Overwrite::Always => {
            if path.exists() {
                clear_read_only(path)?;
            }
            create_parent_dirs(path)?;
            fs::write(path, render()?).map_err(|e| Error::io(path, e))?;
            Ok(WriteResult::Written)
        }
        Overwrite::IfMissing => {
            if path.exists() {
                debug!(path = %path.display(), "keeping existing file");
                Ok(WriteResult::Skipped)
            } else {
                create_parent_dirs(path)?;
                fs::write(path, render()?).map_err(|e| Error::io(path, e))?;
                Ok(WriteResult::Written)
            }
        }
    }
}

/// Write `content` to `path` only if it differs from what is already there.
///
/// Identical files are left untouched apart from re-asserting the read-only
/// permissions. Changed or missing files are replaced and then marked
/// read-only, so hand edits to generated code fail loudly.
pub fn write_if_changed(path: &Path, content: &str) -> Result<WriteResult> {
    match fs::read(path) {
        Ok(existing) if existing == content.as_bytes() => {
            set_read_only(path)?;
            debug!(path = %path.display(), "content unchanged");
            return Ok(WriteResult::Skipped);
        }
        Ok(_) => {
            // a read-only file cannot be removed on every platform
            clear_read_only(path)?;
            fs::remove_file(path).map_err(|e| Error::io(path, e))?;
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(Error::io(path, e)),
    }

    create_parent_dirs(path)?;
    fs::write(path, content).map_err(|e| Error::io(path, e))?;
    set_read_only(path)?;
    debug!(path = %path.display(), bytes = content.len(), "file written");
    Ok(WriteResult::Written)
}

fn create_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    Ok(())
}

/// Mark `path` read-only for owner, group and others.
pub fn set_read_only(path: &Path) -> Result<()> {
    set_mode(path, true)
}

/// Give the owner write access to `path` again.
pub fn clear_read_only(path: &Path) -> Result<()> {
    set_mode(path, false)
}

#[cfg(unix)]
fn set_mode(path: &Path, read_only: bool) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = if read_only { 0o444 } else { 0o644 };
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(|e| Error::io(path, e))
}

#[cfg(not(unix))]
fn set_mode(path: &Path, read_only: bool) -> Result<()> {
    let mut permissions = fs::metadata(path)
        .map_err(|e| Error::io(path, e))?
        .permissions();
    permissions.set_readonly(read_only);
    fs::set_permissions(path, permissions).map_err(|e| Error::io(path, e))
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (identical content, or kept because it already exists)
    Skipped,
}

/// A file to be generated
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new generated file (default rules: rewrite if changed, read-only)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Override the write rules.
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        write_with_rules(&self.path, self.rules, || Ok(self.content.clone()))
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Replace only when the content differs; the result is read-only (generated code)
    #[default]
    IfChanged,
    /// Only create if file doesn't exist; the result stays writable (user config)
    IfMissing,
    /// Replace unconditionally and leave writable (forced user config)
    Always,
}
