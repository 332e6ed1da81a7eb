//! `lls`: list the immediate children of a directory.
//!
//! Run with `-l`, `-C`, `-1` for the different layouts and `-t`/`-s` to
//! reorder. See `lls --help`.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;

use lls::cli::{ArgWarning, Cli};
use lls::config::AppConfig;
use lls::core;

// ───────────────────────────────────────── diagnostics ───────

/// Print argument warnings, followed by a help hint if any option was
/// not recognised.
fn report_arg_warnings(warnings: &[ArgWarning]) {
    for warning in warnings {
        eprintln!("lls: {warning}");
    }
    if warnings.iter().any(|w| matches!(w, ArgWarning::UnknownOption(_))) {
        eprintln!("Try 'lls --help' for more information.");
    }
}

// ───────────────────────────────────────── main ─────────────

fn main() -> Result<ExitCode> {
    // Logging stays on stderr so it never mixes with the listing.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let (cli, warnings) = Cli::parse_lenient(std::env::args_os());
    report_arg_warnings(&warnings);

    let options = cli.to_options();
    let config = AppConfig::load();
    tracing::debug!(?options, ?config, "starting listing");

    // ── list ──────────────────────────────────────────────────
    let rendered = match core::list_directory(&options, &config.terminal_width()) {
        Ok(rendered) => rendered,
        Err(err) => {
            eprintln!("lls: {err}");
            return Ok(ExitCode::from(2));
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.text.as_bytes())?;
    stdout.flush()?;

    for warning in &rendered.warnings {
        eprintln!("lls: {warning}");
    }

    Ok(ExitCode::SUCCESS)
}
