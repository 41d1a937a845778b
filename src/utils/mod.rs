//! Utility functions and helpers

use crate::errors::{AnalyzerError, Result};

/// Parse an address literal as found in program exports.
///
/// Accepts a hex literal with or without a `0x`/`0X` prefix.
pub fn parse_address(literal: &str) -> Result<u64> {
    let digits = literal
        .strip_prefix("0x")
        .or_else(|| literal.strip_prefix("0X"))
        .unwrap_or(literal);
    u64::from_str_radix(digits, 16)
        .map_err(|_| AnalyzerError::InvalidAddress(literal.to_string()))
}

/// Format an address the way the rest of the tooling writes them
pub fn format_address(addr: u64) -> String {
    format!("{:#x}", addr)
}
