//! Listing options and the decisions resolved from them.
//!
//! The boolean flags are folded once into a [`SortKey`] and a
//! [`LayoutMode`]; nothing downstream looks at the raw flags again.

use std::path::PathBuf;

use super::sort::SortKey;

/// Everything that controls a single listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub long_listing: bool,
    pub directories_only: bool,
    pub sort_by_time: bool,
    pub sort_by_size: bool,
    pub one_column: bool,
    pub multi_column: bool,
    pub directory: PathBuf,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            long_listing: false,
            directories_only: false,
            sort_by_time: false,
            sort_by_size: false,
            one_column: false,
            multi_column: false,
            directory: PathBuf::from("."),
        }
    }
}

impl ListOptions {
    pub fn sort_key(&self) -> SortKey {
        SortKey::resolve(self)
    }

    pub fn layout_mode(&self) -> LayoutMode {
        LayoutMode::resolve(self)
    }
}

impl SortKey {
    /// Time takes precedence over size when both are requested.
    pub fn resolve(options: &ListOptions) -> Self {
        if options.sort_by_time {
            SortKey::Modified
        } else if options.sort_by_size {
            SortKey::Size
        } else {
            SortKey::None
        }
    }
}

/// How the ordered entries are laid out as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Row-major columns fitted to the terminal width (`-C`).
    Grid,
    /// One detailed line per entry (`-l`).
    Long,
    /// One bare name per line (`-1`).
    OneColumn,
    /// Names joined by two spaces on a single line.
    Default,
}

impl LayoutMode {
    /// Precedence: grid, then long, then one-column, then default.
    pub fn resolve(options: &ListOptions) -> Self {
        if options.multi_column {
            LayoutMode::Grid
        } else if options.long_listing {
            LayoutMode::Long
        } else if options.one_column {
            LayoutMode::OneColumn
        } else {
            LayoutMode::Default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_wins_over_size() {
        let options = ListOptions {
            sort_by_time: true,
            sort_by_size: true,
            ..Default::default()
        };
        assert_eq!(options.sort_key(), SortKey::Modified);
    }

    #[test]
    fn size_alone() {
        let options = ListOptions {
            sort_by_size: true,
            ..Default::default()
        };
        assert_eq!(options.sort_key(), SortKey::Size);
        assert_eq!(ListOptions::default().sort_key(), SortKey::None);
    }

    #[test]
    fn grid_beats_every_other_layout() {
        let options = ListOptions {
            multi_column: true,
            long_listing: true,
            one_column: true,
            ..Default::default()
        };
        assert_eq!(options.layout_mode(), LayoutMode::Grid);
    }

    #[test]
    fn long_beats_one_column() {
        let options = ListOptions {
            long_listing: true,
            one_column: true,
            ..Default::default()
        };
        assert_eq!(options.layout_mode(), LayoutMode::Long);
    }

    #[test]
    fn falls_back_to_default_layout() {
        assert_eq!(ListOptions::default().layout_mode(), LayoutMode::Default);
        let options = ListOptions {
            one_column: true,
            ..Default::default()
        };
        assert_eq!(options.layout_mode(), LayoutMode::OneColumn);
    }
}
