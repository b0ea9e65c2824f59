//! Command implementations for the `alacazam-meta` tool
//!
//! Each command returns the text it would print so the binary stays a thin
//! argument parser and the commands can be tested directly.

pub mod layout;
pub mod tags;
pub mod trkn;

use anyhow::{Context, Result};

/// Render bytes as lowercase hex, one space between bytes
pub fn format_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse hex input, ignoring whitespace and `:` separators
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let compact: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    let compact = compact
        .strip_prefix("0x")
        .or_else(|| compact.strip_prefix("0X"))
        .unwrap_or(&compact);
    hex::decode(compact).with_context(|| format!("Invalid hex input: {}", input))
}
