//! Error type for checksumming a file.

use std::io;
use std::path::{Path, PathBuf};

/// The file could not be opened or read. Not retried; callers surface it and exit.
#[derive(Debug, thiserror::Error)]
pub enum ChecksumError {
    #[error("cannot read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ChecksumError {
    pub(crate) fn file_access(path: &Path, source: io::Error) -> Self {
        ChecksumError::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    }
}
