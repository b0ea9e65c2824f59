//! Integration tests for layout descriptor files.
//!
//! Writes descriptor TOML to a temp dir, encodes it through the command
//! functions, and checks the bytes on disk.

use alacazam_cli::layout;
use alacazam_meta::{ChannelLabel, ChannelLayout, LayoutTag, decode_channel_layout};
use std::fs;
use tempfile::tempdir;

const SURROUND_DESCRIPTOR: &str = r#"
tag = 0x00790006

[[channels]]
label = 1

[[channels]]
label = 2

[[channels]]
label = 3

[[channels]]
label = 4

[[channels]]
label = 5

[[channels]]
label = 6
"#;

#[test]
fn test_encode_descriptor_to_file() {
    let dir = tempdir().unwrap();
    let descriptor = dir.path().join("surround.toml");
    let output = dir.path().join("surround.bin");
    fs::write(&descriptor, SURROUND_DESCRIPTOR).unwrap();

    let summary = layout::encode(&descriptor, Some(&output)).unwrap();
    assert!(summary.starts_with("Wrote 132 bytes"));

    let bytes = fs::read(&output).unwrap();
    assert_eq!(bytes.len(), 12 + 6 * 20);
    assert_eq!(&bytes[0..4], &[0x00, 0x79, 0x00, 0x06]);

    let decoded = decode_channel_layout(&bytes).unwrap();
    assert_eq!(decoded.tag, LayoutTag::MPEG_5_1_A);
    assert_eq!(decoded.channel_descriptions[3].label, ChannelLabel::LFE_SCREEN);
}

#[test]
fn test_encode_descriptor_to_hex() {
    let dir = tempdir().unwrap();
    let descriptor = dir.path().join("mono.toml");
    fs::write(&descriptor, "tag = 0x00640001\n").unwrap();

    let hex = layout::encode(&descriptor, None).unwrap();
    assert_eq!(hex, "00 64 00 01 00 00 00 00 00 00 00 00");
}

#[test]
fn test_mismatched_descriptor_fails() {
    let dir = tempdir().unwrap();
    let descriptor = dir.path().join("bad.toml");
    fs::write(&descriptor, "tag = 0x00650002\n\n[[channels]]\nlabel = 1\n").unwrap();

    let err = layout::encode(&descriptor, None).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("implies 2 channel descriptions, got 1"), "{message}");
}

#[test]
fn test_missing_descriptor_fails() {
    let dir = tempdir().unwrap();
    let err = layout::load_descriptor(&dir.path().join("missing.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read layout descriptor"));
}

#[test]
fn test_decode_round_trips_through_descriptor() {
    let dir = tempdir().unwrap();
    let descriptor = dir.path().join("surround.toml");
    fs::write(&descriptor, SURROUND_DESCRIPTOR).unwrap();

    let hex = layout::encode(&descriptor, None).unwrap();
    let toml = layout::decode(&hex).unwrap();

    let original = layout::load_descriptor(&descriptor).unwrap();
    let decoded: ChannelLayout = toml::from_str(&toml).unwrap();
    assert_eq!(decoded, original);
}
