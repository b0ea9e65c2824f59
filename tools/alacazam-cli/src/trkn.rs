//! `trkn` and `trkn-decode` commands

use crate::{format_hex, parse_hex};
use alacazam_meta::{TrackNumber, decode_track_number};
use anyhow::{Context, Result};

/// Encode `n` or `n/m` as a hex `trkn` blob
pub fn encode(value: &str) -> Result<String> {
    let track: TrackNumber = value.parse()?;
    tracing::debug!("Encoding track {} of {}", track.number, track.count);
    Ok(format_hex(&track.to_bytes()))
}

/// Decode a hex `trkn` blob back to `n/m`
pub fn decode(hex: &str) -> Result<String> {
    let bytes = parse_hex(hex)?;
    let track = decode_track_number(&bytes).context("Failed to decode track number")?;
    Ok(track.to_string())
}
