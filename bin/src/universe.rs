//! Symbol universe handling.
//!
//! The screener never discovers tickers on its own: universes are
//! injected as arguments or a file. Only a small default list ships with
//! the binary for zero-argument runs.

use ronda_core::{Result, ScreenError};
use std::path::Path;

/// Default universe when no symbols are given.
pub(crate) const DEFAULT_UNIVERSE: &[&str] =
    &["AAPL", "MSFT", "GOOGL", "AMZN", "NVDA", "META", "TSLA"];

/// The default universe as owned strings.
pub(crate) fn default_universe() -> Vec<String> {
    DEFAULT_UNIVERSE.iter().map(|s| (*s).to_string()).collect()
}

/// Normalize user-supplied symbols: trim, uppercase, drop empties.
///
/// Order is preserved; the table's tie-breaking depends on it.
pub(crate) fn normalize(symbols: &[String]) -> Vec<String> {
    symbols
        .iter()
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parse a symbol list: one symbol per line, `#` starts a comment.
pub(crate) fn parse_symbol_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.split('#').next().unwrap_or("").trim().to_uppercase())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Load a symbol list from a file.
pub(crate) fn load_symbol_file(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ScreenError::InvalidData(format!("Cannot read symbol file {}: {e}", path.display()))
    })?;
    let symbols = parse_symbol_lines(&contents);
    if symbols.is_empty() {
        return Err(ScreenError::InvalidData(format!(
            "No symbols found in {}",
            path.display()
        )));
    }
    Ok(symbols)
}
