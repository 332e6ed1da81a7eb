//! Directory enumeration: collect the immediate children of a path.
//!
//! Only one level is read. Symlinks are reported as themselves, never
//! followed, and hidden (dot-prefixed) entries are kept: whatever the OS
//! returns is what gets listed.

use std::io;
use std::path::Path;

use super::entry::Entry;
use super::error::{ListError, Result};

/// Collect the immediate children of `dir` in enumeration order.
///
/// With `directories_only` set, everything that isn't a directory is
/// dropped. An empty directory yields an empty `Vec`.
pub fn collect_entries(dir: &Path, directories_only: bool) -> Result<Vec<Entry>> {
    let meta = std::fs::metadata(dir).map_err(|e| ListError::unavailable(dir, e))?;
    if !meta.is_dir() {
        return Err(ListError::unavailable(
            dir,
            io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }

    let reader = std::fs::read_dir(dir).map_err(|e| ListError::unavailable(dir, e))?;

    let mut entries = Vec::new();
    for item in reader {
        let item = item.map_err(|e| ListError::unavailable(dir, e))?;
        let entry = Entry::from_dir_entry(&item);
        if directories_only && !entry.is_dir {
            continue;
        }
        entries.push(entry);
    }

    tracing::debug!("collected {} entries from {}", entries.len(), dir.display());
    Ok(entries)
}
