use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Result type for ctlegen-core operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A file that generation depends on does not exist.
    #[error("file not found: '{}'", path.display())]
    NotFound { path: PathBuf },

    /// A chmod, remove or write was refused by the filesystem.
    #[error("permission denied for '{}'", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("i/o error on '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `append` was called before any line was written.
    #[error("cannot append to the last line of an empty buffer")]
    EmptyBuffer,
}

impl Error {
    /// Classify an i/o error for `path` by its kind.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Error::NotFound { path },
            io::ErrorKind::PermissionDenied => Error::PermissionDenied { path, source },
            _ => Error::Io { path, source },
        }
    }

    /// Path the error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::NotFound { path }
            | Error::PermissionDenied { path, .. }
            | Error::Io { path, .. } => Some(path),
            Error::EmptyBuffer => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_classifies_not_found() {
        let err = Error::io("missing.h", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, Error::NotFound { .. }));
        assert_eq!(err.path(), Some(Path::new("missing.h")));
    }

    #[test]
    fn test_io_classifies_permission_denied() {
        let err = Error::io("ro.h", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, Error::PermissionDenied { .. }));
    }

    #[test]
    fn test_io_keeps_other_kinds() {
        let err = Error::io("x.h", io::Error::other("disk on fire"));
        assert!(matches!(err, Error::Io { .. }));
        assert_eq!(err.to_string(), "i/o error on 'x.h'");
    }

    #[test]
    fn test_empty_buffer_has_no_path() {
        assert_eq!(Error::EmptyBuffer.path(), None);
    }
}
