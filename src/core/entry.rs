//! Metadata snapshot of a single directory child.

use std::fs::DirEntry;
use std::time::SystemTime;

/// Lightweight metadata we keep per listed entry.
///
/// Created once during collection and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Base name only, never a full path.
    pub name: String,
    pub is_dir: bool,
    /// Size in bytes as reported by the filesystem.
    pub size: u64,
    /// `None` when the platform or filesystem cannot report it.
    pub modified: Option<SystemTime>,
}

impl Entry {
    pub fn new(
        name: impl Into<String>,
        is_dir: bool,
        size: u64,
        modified: Option<SystemTime>,
    ) -> Self {
        Self {
            name: name.into(),
            is_dir,
            size,
            modified,
        }
    }

    /// Snapshot a `read_dir` entry without following symlinks.
    ///
    /// A child whose metadata can't be read is still listed, with a zero
    /// size and no modification time.
    pub fn from_dir_entry(entry: &DirEntry) -> Self {
        let name = entry.file_name().to_string_lossy().into_owned();
        match entry.metadata() {
            Ok(meta) => Self {
                name,
                is_dir: meta.is_dir(),
                size: meta.len(),
                modified: meta.modified().ok(),
            },
            Err(err) => {
                tracing::debug!("metadata unavailable for {name}: {err}");
                let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
                Self {
                    name,
                    is_dir,
                    size: 0,
                    modified: None,
                }
            }
        }
    }
}
