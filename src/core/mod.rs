//! Core listing pipeline - collect, sort, lay out.
//!
//! Nothing in this module writes to stdout or stderr; callers decide what
//! to do with the rendered text and the collected warnings.

pub mod entry;
pub mod error;
pub mod fs;
pub mod layout;
pub mod options;
pub mod sort;

use crate::term::WidthProvider;

use self::error::Result;
use self::layout::Rendered;
use self::options::ListOptions;

/// Produce the listing for `options.directory`.
///
/// Collection, sorting and rendering run strictly in that order. Fails
/// only with [`error::ListError::DirectoryUnavailable`]; per-entry problems
/// end up in [`Rendered::warnings`].
pub fn list_directory(options: &ListOptions, width: &dyn WidthProvider) -> Result<Rendered> {
    let mut entries = fs::collect_entries(&options.directory, options.directories_only)?;
    sort::sort_entries(&mut entries, options.sort_key());
    Ok(layout::render(&entries, options.layout_mode(), width))
}
