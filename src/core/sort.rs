//! Entry ordering.
//!
//! All orderings are descending on their key and rely on `sort_by` being
//! stable: entries with equal keys keep their collection order.

use super::entry::Entry;

/// Which key, if any, reorders the collected entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Keep collection order.
    #[default]
    None,
    /// Most recently modified first. Entries without a time sort last.
    Modified,
    /// Largest first.
    Size,
}

/// Reorder `entries` in place according to `key`.
pub fn sort_entries(entries: &mut [Entry], key: SortKey) {
    match key {
        SortKey::None => {}
        SortKey::Modified => entries.sort_by(|a, b| b.modified.cmp(&a.modified)),
        SortKey::Size => entries.sort_by(|a, b| b.size.cmp(&a.size)),
    }
}
