//! Text layouts for an ordered entry sequence.
//!
//! Exactly one [`LayoutMode`] is rendered per call. The result carries the
//! listing text plus any per-entry problems that were skipped along the way,
//! leaving it to the caller to decide where diagnostics go.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Local, TimeZone};
use unicode_width::UnicodeWidthStr;

use super::entry::Entry;
use super::error::ListError;
use super::options::LayoutMode;
use crate::term::WidthProvider;

/// Space placed after every grid cell.
const GRID_GAP: usize = 2;
/// Minimum width of the size field in long listings.
const SIZE_FIELD_WIDTH: usize = 10;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Output of a render pass.
#[derive(Debug, Default)]
pub struct Rendered {
    pub text: String,
    /// Entries that could not be rendered, in listing order.
    pub warnings: Vec<ListError>,
}

/// Column arithmetic for grid mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    /// Widest name, in terminal cells.
    pub name_width: usize,
    pub column_width: usize,
    pub columns: usize,
}

impl GridGeometry {
    pub fn new(name_width: usize, terminal_width: usize) -> Self {
        let column_width = name_width + GRID_GAP;
        Self {
            name_width,
            column_width,
            columns: (terminal_width / column_width).max(1),
        }
    }

    pub fn for_entries(entries: &[Entry], terminal_width: usize) -> Self {
        let name_width = entries.iter().map(|e| e.name.width()).max().unwrap_or(0);
        Self::new(name_width, terminal_width)
    }

    /// Number of rows needed for `count` entries.
    pub fn rows(&self, count: usize) -> usize {
        count.div_ceil(self.columns)
    }
}

/// Render `entries` in `mode`. The width provider is consulted only for
/// grid layouts.
pub fn render(entries: &[Entry], mode: LayoutMode, width: &dyn WidthProvider) -> Rendered {
    match mode {
        LayoutMode::Grid => render_grid(entries, width.width()),
        LayoutMode::Long => render_long(entries),
        LayoutMode::OneColumn => render_one_column(entries),
        LayoutMode::Default => render_default(entries),
    }
}

fn render_grid(entries: &[Entry], terminal_width: usize) -> Rendered {
    let geometry = GridGeometry::for_entries(entries, terminal_width);
    let mut text = String::new();

    for (i, entry) in entries.iter().enumerate() {
        text.push_str(&entry.name);
        let pad = geometry.name_width.saturating_sub(entry.name.width()) + GRID_GAP;
        text.extend(std::iter::repeat_n(' ', pad));
        if (i + 1) % geometry.columns == 0 {
            text.push('\n');
        }
    }
    if entries.len() % geometry.columns != 0 {
        text.push('\n');
    }

    Rendered {
        text,
        warnings: Vec::new(),
    }
}

fn render_long(entries: &[Entry]) -> Rendered {
    let mut rendered = Rendered::default();

    for entry in entries {
        let Some(stamp) = format_timestamp(entry.modified) else {
            rendered.warnings.push(ListError::TimestampConversion {
                name: entry.name.clone(),
            });
            continue;
        };
        let kind = if entry.is_dir { 'd' } else { '-' };
        rendered.text.push_str(&format!(
            "{kind}{size:>width$} {stamp} {name}\n",
            size = entry.size,
            width = SIZE_FIELD_WIDTH,
            name = entry.name,
        ));
    }
    rendered.text.push('\n');
    rendered
}

fn render_one_column(entries: &[Entry]) -> Rendered {
    let mut text = String::new();
    for entry in entries {
        text.push_str(&entry.name);
        text.push('\n');
    }
    Rendered {
        text,
        warnings: Vec::new(),
    }
}

fn render_default(entries: &[Entry]) -> Rendered {
    let mut text = entries
        .iter()
        .map(|e| e.name.as_str())
        .collect::<Vec<_>>()
        .join("  ");
    text.push('\n');
    Rendered {
        text,
        warnings: Vec::new(),
    }
}

/// Format a modification time as local `YYYY-MM-DD HH:MM:SS`.
///
/// Uses chrono's own timezone handling, so it holds no shared buffers and
/// is safe to call from any thread. Returns `None` for a missing time or
/// one outside chrono's representable range.
pub fn format_timestamp(modified: Option<SystemTime>) -> Option<String> {
    let (secs, nanos) = match modified?.duration_since(UNIX_EPOCH) {
        Ok(d) => (i64::try_from(d.as_secs()).ok()?, d.subsec_nanos()),
        Err(before) => {
            let d = before.duration();
            let secs = i64::try_from(d.as_secs()).ok()?;
            if d.subsec_nanos() == 0 {
                (-secs, 0)
            } else {
                (-secs - 1, 1_000_000_000 - d.subsec_nanos())
            }
        }
    };
    Local
        .timestamp_opt(secs, nanos)
        .single()
        .map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
}
