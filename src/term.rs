//! Terminal width lookup.
//!
//! The layout engine only asks for a width in grid mode, through the
//! [`WidthProvider`] trait, so tests can pin it with [`FixedWidth`].

/// Width used when the terminal can't be queried.
pub const FALLBACK_WIDTH: usize = 80;

/// Source of the output width in columns.
pub trait WidthProvider {
    fn width(&self) -> usize;
}

/// Queries the real terminal, once per call, falling back silently.
#[derive(Debug, Clone, Copy)]
pub struct TerminalWidth {
    pub fallback: usize,
}

impl Default for TerminalWidth {
    fn default() -> Self {
        Self {
            fallback: FALLBACK_WIDTH,
        }
    }
}

impl WidthProvider for TerminalWidth {
    fn width(&self) -> usize {
        match crossterm::terminal::size() {
            Ok((cols, _)) if cols > 0 => usize::from(cols),
            Ok(_) => self.fallback,
            Err(err) => {
                tracing::debug!("terminal width unavailable ({err}), using {}", self.fallback);
                self.fallback
            }
        }
    }
}

/// A width that never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidth(pub usize);

impl WidthProvider for FixedWidth {
    fn width(&self) -> usize {
        self.0
    }
}
