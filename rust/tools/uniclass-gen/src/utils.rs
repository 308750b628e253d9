//! Common utilities for uniclass-gen

use anyhow::{Context, Result};
use std::path::Path;

/// Checks if a file exists and is readable
pub fn validate_file_exists(path: &str) -> Result<()> {
    let file_path = Path::new(path);
    if !file_path.exists() {
        anyhow::bail!("File does not exist: {}", path);
    }
    if !file_path.is_file() {
        anyhow::bail!("Path is not a file: {}", path);
    }
    Ok(())
}

/// Parses a hex codepoint, with or without a `U+` / `0x` prefix
pub fn parse_codepoint(s: &str) -> Result<u32> {
    let digits = s
        .strip_prefix("U+")
        .or_else(|| s.strip_prefix("0x"))
        .unwrap_or(s);
    u32::from_str_radix(digits, 16).with_context(|| format!("Invalid codepoint: {}", s))
}

/// Initializes `env_logger`: warnings by default, more with each `-v`.
/// `RUST_LOG` takes precedence when set.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
