//! Command-line surface.
//!
//! Argument problems never abort a run: unknown options are stripped out
//! before clap sees the arguments, repeated flags simply re-set themselves,
//! and surplus directories are dropped. Each is reported back as an
//! [`ArgWarning`].

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use thiserror::Error;

use crate::core::options::ListOptions;

// ───────────────────────────────────────── warnings ──────────

/// A non-fatal problem with the command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgWarning {
    #[error("unknown option: {0}")]
    UnknownOption(String),
    /// Only the last directory argument is listed.
    #[error("ignoring extra directory argument: {}", .0.display())]
    ExtraDirectory(PathBuf),
}

// ───────────────────────────────────────── CLI ───────────────

/// Short flags clap knows about, including the `-?` help alias.
const KNOWN_SHORTS: &str = "ldts1Ch?";
const KNOWN_LONGS: &[&str] = &["--help", "--version"];

#[derive(Parser, Debug)]
#[command(
    name = "lls",
    version,
    about = "List directory contents",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// Long listing format.
    #[arg(short = 'l')]
    pub long: bool,

    /// List directories only.
    #[arg(short = 'd')]
    pub directories_only: bool,

    /// Sort by modification time, newest first (wins over -s).
    #[arg(short = 't')]
    pub sort_time: bool,

    /// Sort by file size, largest first.
    #[arg(short = 's')]
    pub sort_size: bool,

    /// One entry per line.
    #[arg(short = '1')]
    pub one_column: bool,

    /// Multi-column output fitted to the terminal width.
    #[arg(short = 'C')]
    pub multi_column: bool,

    /// Print help.
    #[allow(dead_code)]
    #[arg(short = 'h', short_alias = '?', long = "help", action = ArgAction::Help)]
    help: Option<bool>,

    /// Print version.
    #[allow(dead_code)]
    #[arg(long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    /// Directory to list (defaults to `.`; the last one given wins).
    pub directories: Vec<PathBuf>,
}

impl Cli {
    /// Strip unknown options from `args`, then parse what is left.
    ///
    /// Returns the parsed CLI and every argument-level warning, unknown
    /// options first, then ignored directories.
    pub fn parse_lenient<I, T>(args: I) -> (Self, Vec<ArgWarning>)
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let (kept, unknown) = split_unknown(args);
        let cli = Self::parse_from(kept);

        let mut warnings: Vec<_> = unknown.into_iter().map(ArgWarning::UnknownOption).collect();
        warnings.extend(cli.extra_directories().iter().cloned().map(ArgWarning::ExtraDirectory));
        (cli, warnings)
    }

    /// Directory arguments that lose to the last one.
    pub fn extra_directories(&self) -> &[PathBuf] {
        match self.directories.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }

    pub fn to_options(&self) -> ListOptions {
        ListOptions {
            long_listing: self.long,
            directories_only: self.directories_only,
            sort_by_time: self.sort_time,
            sort_by_size: self.sort_size,
            one_column: self.one_column,
            multi_column: self.multi_column,
            directory: self
                .directories
                .last()
                .cloned()
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

/// Separate recognised arguments from unknown option tokens.
///
/// The first argument (program name) is always kept. A combined short
/// group such as `-lx` is rejected whole if any letter is unknown.
/// Everything after `--` is kept verbatim.
pub fn split_unknown<I, T>(args: I) -> (Vec<OsString>, Vec<String>)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut kept = Vec::new();
    let mut unknown = Vec::new();
    let mut options_done = false;

    for (i, arg) in args.into_iter().map(Into::into).enumerate() {
        if i == 0 || options_done {
            kept.push(arg);
            continue;
        }
        let Some(text) = arg.to_str() else {
            kept.push(arg);
            continue;
        };
        if text == "--" {
            options_done = true;
            kept.push(arg);
        } else if text.starts_with("--") {
            if KNOWN_LONGS.contains(&text) {
                kept.push(arg);
            } else {
                unknown.push(text.to_string());
            }
        } else if text.len() > 1 && text.starts_with('-') {
            if text[1..].chars().all(|c| KNOWN_SHORTS.contains(c)) {
                kept.push(arg);
            } else {
                unknown.push(text.to_string());
            }
        } else {
            kept.push(arg);
        }
    }

    (kept, unknown)
}
