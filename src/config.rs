//! User configuration.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/lls/config.toml` (default `~/.config/lls/config.toml`).
//! A missing or unreadable file means defaults.

use std::path::PathBuf;

use crate::term::{TerminalWidth, FALLBACK_WIDTH};

// ───────────────────────────────────────── config ────────────

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Columns assumed when the terminal width can't be queried.
    pub fallback_width: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fallback_width: FALLBACK_WIDTH,
        }
    }
}

impl AppConfig {
    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents),
            Err(err) => {
                tracing::debug!("no config at {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Parse `key = value` lines. Blank lines, `#` comments and `[section]`
    /// headers are skipped; unknown keys and bad values are ignored.
    pub fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            match key {
                "fallback_width" => match value.parse::<usize>() {
                    Ok(v) => config.fallback_width = v.clamp(1, 1000),
                    Err(_) => tracing::debug!("ignoring fallback_width = {value}"),
                },
                other => tracing::debug!("ignoring unknown config key {other}"),
            }
        }

        config
    }

    /// Terminal width provider honouring the configured fallback.
    pub fn terminal_width(&self) -> TerminalWidth {
        TerminalWidth {
            fallback: self.fallback_width,
        }
    }
}

// ───────────────────────────────────────── paths ─────────────

/// Return the config file path (`$XDG_CONFIG_HOME/lls/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("lls").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(AppConfig::parse(""), AppConfig::default());
        assert_eq!(AppConfig::default().fallback_width, 80);
    }

    #[test]
    fn reads_fallback_width() {
        let config = AppConfig::parse("# lls\n[display]\nfallback_width = 120\n");
        assert_eq!(config.fallback_width, 120);
        assert_eq!(config.terminal_width().fallback, 120);
    }

    #[test]
    fn clamps_and_ignores_bad_values() {
        assert_eq!(AppConfig::parse("fallback_width = 0").fallback_width, 1);
        assert_eq!(AppConfig::parse("fallback_width = wide").fallback_width, 80);
        assert_eq!(AppConfig::parse("colour = yes\nnot a pair").fallback_width, 80);
    }
}
