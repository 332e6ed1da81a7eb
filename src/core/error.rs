use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ListError>;

/// Everything that can go wrong while producing a listing.
#[derive(Debug, Error)]
pub enum ListError {
    /// The path is missing, not a directory, or unreadable. Aborts the
    /// listing of that directory.
    #[error("cannot access '{}': {source}", .path.display())]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A single entry's modification time could not be turned into a
    /// local timestamp. Only that entry's long-format line is lost.
    #[error("error converting time for file: {name}")]
    TimestampConversion { name: String },
}

impl ListError {
    pub fn unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::DirectoryUnavailable {
            path: path.into(),
            source,
        }
    }
}
