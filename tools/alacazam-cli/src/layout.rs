//! `layout` and `layout-decode` commands
//!
//! # Descriptor file
//!
//! ```toml
//! # (layout_id << 16) | channel_count, or 0 to use the channel list
//! tag = 0x00650002
//!
//! # Only read when tag = 0x00010000
//! channel_bitmap = "LEFT | RIGHT"
//!
//! [[channels]]
//! label = 1
//!
//! [[channels]]
//! label = 2
//! ```

use crate::{format_hex, parse_hex};
use alacazam_meta::{ChannelLayout, decode_channel_layout};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a channel layout descriptor from a TOML file
pub fn load_descriptor(path: &Path) -> Result<ChannelLayout> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout descriptor: {}", path.display()))?;
    let layout: ChannelLayout = toml::from_str(&content)
        .with_context(|| format!("Failed to parse layout descriptor: {}", path.display()))?;
    Ok(layout)
}

/// Encode a descriptor file
///
/// Writes raw bytes to `output` when given and returns a summary line,
/// otherwise returns the encoded layout as hex.
pub fn encode(path: &Path, output: Option<&Path>) -> Result<String> {
    let layout = load_descriptor(path)?;
    let bytes = layout
        .to_bytes()
        .with_context(|| format!("Failed to encode {}", path.display()))?;

    tracing::info!(
        "Encoded layout {} ({} channels, {} bytes)",
        describe_tag(&layout),
        layout.channel_count(),
        bytes.len()
    );

    match output {
        Some(output) => {
            fs::write(output, &bytes)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            Ok(format!("Wrote {} bytes to {}", bytes.len(), output.display()))
        }
        None => Ok(format_hex(&bytes)),
    }
}

/// Decode a hex layout into descriptor TOML
pub fn decode(hex: &str) -> Result<String> {
    let bytes = parse_hex(hex)?;
    let layout = decode_channel_layout(&bytes).context("Failed to decode channel layout")?;
    tracing::info!(
        "Decoded layout {} ({} channels)",
        describe_tag(&layout),
        layout.channel_count()
    );
    toml::to_string(&layout).context("Failed to serialize channel layout")
}

fn describe_tag(layout: &ChannelLayout) -> String {
    match layout.tag.name() {
        Some(name) => format!("{} ({})", name, layout.tag),
        None => layout.tag.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alacazam_meta::LayoutTag;

    #[test]
    fn test_describe_tag() {
        let layout = ChannelLayout::from_tag(LayoutTag::STEREO);
        assert_eq!(describe_tag(&layout), "Stereo (0x00650002)");

        let layout = ChannelLayout::from_tag(LayoutTag(0x0FA0_0001));
        assert_eq!(describe_tag(&layout), "0x0FA00001");
    }

    #[test]
    fn test_decode_command() {
        let toml = decode("00 65 00 02 00 00 00 00 00 00 00 00").unwrap();
        let layout: ChannelLayout = toml::from_str(&toml).unwrap();
        assert_eq!(layout, ChannelLayout::from_tag(LayoutTag::STEREO));
    }

    #[test]
    fn test_decode_command_rejects_truncated() {
        assert!(decode("00 65 00 02").is_err());
    }
}
