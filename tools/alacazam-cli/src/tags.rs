//! `tags` command

use crate::format_hex;
use alacazam_meta::{InfoKeyMapping, MetadataIdentifier, MetadataValue};
use anyhow::{Result, bail};

/// Show how `key=value` info dictionary entries map to metadata items
pub fn map_entries(entries: &[String]) -> Result<String> {
    let mut lines = Vec::with_capacity(entries.len());

    for entry in entries {
        let Some((key, value)) = entry.split_once('=') else {
            bail!("Expected KEY=VALUE, got {:?}", entry);
        };

        let line = match MetadataIdentifier::from_info_key(key) {
            InfoKeyMapping::Mapped(identifier) => {
                let target = format!("{}/{}", identifier.key_space(), identifier.key());
                match identifier.format_value(value) {
                    Some(MetadataValue::Text(text)) => format!("{key} -> {target} = {text:?}"),
                    Some(MetadataValue::Data(data)) => {
                        format!("{key} -> {target} = [{}]", format_hex(&data))
                    }
                    None => format!("{key} -> {target} (invalid value {value:?})"),
                }
            }
            InfoKeyMapping::Ignored => format!("{key} (ignored)"),
            InfoKeyMapping::Unsupported => format!("{key} (unsupported)"),
        };
        lines.push(line);
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_entries() {
        let entries = vec![
            "title=Intro".to_string(),
            "track number=5/12".to_string(),
            "source encoder=x".to_string(),
            "tempo=120".to_string(),
        ];
        let output = map_entries(&entries).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "title -> itsk/©nam = \"Intro\"");
        assert_eq!(lines[1], "track number -> itsk/trkn = [00 00 00 05 00 00 00 0c]");
        assert_eq!(lines[2], "source encoder (ignored)");
        assert_eq!(lines[3], "tempo (unsupported)");
    }

    #[test]
    fn test_map_entries_invalid() {
        assert!(map_entries(&["title".to_string()]).is_err());

        let output = map_entries(&["track number=abc".to_string()]).unwrap();
        assert_eq!(output, "track number -> itsk/trkn (invalid value \"abc\")");
    }
}
