//! Info dictionary to metadata item mapping
//!
//! Source audio files expose their tags as a string-keyed info dictionary.
//! This module maps those keys to iTunes (and ID3) metadata identifiers and
//! converts values into the payload each item expects.

use crate::track_number::TrackNumber;
use serde::{Deserialize, Serialize};

/// Metadata item written to the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetadataIdentifier {
    Album,
    Artist,
    UserComment,
    Composer,
    Copyright,
    UserGenre,
    Lyrics,
    ReleaseDate,
    SongName,
    TrackNumber,
    /// International Standard Recording Code (ID3 frame)
    Isrc,
}

/// Result of looking up an info dictionary key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoKeyMapping {
    Mapped(MetadataIdentifier),
    /// Known key that is deliberately not copied
    Ignored,
    Unsupported,
}

/// Payload of a metadata item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValue {
    Text(String),
    Data(Vec<u8>),
}

impl MetadataIdentifier {
    /// Look up an info dictionary key
    pub fn from_info_key(key: &str) -> InfoKeyMapping {
        let identifier = match key {
            "album" => Self::Album,
            "artist" => Self::Artist,
            "comments" => Self::UserComment,
            "composer" => Self::Composer,
            "copyright" => Self::Copyright,
            "genre" => Self::UserGenre,
            "lyricist" => Self::Lyrics,
            "recorded date" | "year" => Self::ReleaseDate,
            "title" => Self::SongName,
            "track number" => Self::TrackNumber,
            "ISRC" => Self::Isrc,
            "source encoder"
            | "channel layout"
            | "encoding application"
            | "approximate duration in seconds" => return InfoKeyMapping::Ignored,
            _ => {
                tracing::debug!("Skipping unsupported metadata: {}", key);
                return InfoKeyMapping::Unsupported;
            }
        };
        InfoKeyMapping::Mapped(identifier)
    }

    /// Key space of the identifier (`itsk` for iTunes atoms, `id3` for frames)
    pub fn key_space(self) -> &'static str {
        match self {
            Self::Isrc => "id3",
            _ => "itsk",
        }
    }

    /// Atom or frame code
    pub fn key(self) -> &'static str {
        match self {
            Self::Album => "\u{a9}alb",
            Self::Artist => "\u{a9}ART",
            Self::UserComment => "\u{a9}cmt",
            Self::Composer => "\u{a9}wrt",
            Self::Copyright => "cprt",
            Self::UserGenre => "\u{a9}gen",
            Self::Lyrics => "\u{a9}lyr",
            Self::ReleaseDate => "\u{a9}day",
            Self::SongName => "\u{a9}nam",
            Self::TrackNumber => "trkn",
            Self::Isrc => "TSRC",
        }
    }

    /// Convert an info dictionary value into this item's payload
    ///
    /// Track numbers become the 8-byte `trkn` blob; `None` when the text is
    /// not a valid `n` or `n/m` pair. Everything else is passed through.
    pub fn format_value(self, value: &str) -> Option<MetadataValue> {
        match self {
            Self::TrackNumber => match value.parse::<TrackNumber>() {
                Ok(track) => Some(MetadataValue::Data(track.to_bytes().to_vec())),
                Err(e) => {
                    tracing::warn!("Dropping track number: {}", e);
                    None
                }
            },
            _ => Some(MetadataValue::Text(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_keys() {
        assert_eq!(
            MetadataIdentifier::from_info_key("album"),
            InfoKeyMapping::Mapped(MetadataIdentifier::Album)
        );
        assert_eq!(
            MetadataIdentifier::from_info_key("year"),
            InfoKeyMapping::Mapped(MetadataIdentifier::ReleaseDate)
        );
        assert_eq!(
            MetadataIdentifier::from_info_key("track number"),
            InfoKeyMapping::Mapped(MetadataIdentifier::TrackNumber)
        );
        assert_eq!(
            MetadataIdentifier::from_info_key("ISRC"),
            InfoKeyMapping::Mapped(MetadataIdentifier::Isrc)
        );
    }

    #[test]
    fn test_ignored_and_unsupported_keys() {
        assert_eq!(
            MetadataIdentifier::from_info_key("channel layout"),
            InfoKeyMapping::Ignored
        );
        assert_eq!(
            MetadataIdentifier::from_info_key("tempo"),
            InfoKeyMapping::Unsupported
        );
        assert_eq!(
            MetadataIdentifier::from_info_key("Album"),
            InfoKeyMapping::Unsupported
        );
    }

    #[test]
    fn test_identifier_keys() {
        assert_eq!(MetadataIdentifier::TrackNumber.key(), "trkn");
        assert_eq!(MetadataIdentifier::SongName.key(), "©nam");
        assert_eq!(MetadataIdentifier::Isrc.key_space(), "id3");
        assert_eq!(MetadataIdentifier::Album.key_space(), "itsk");
    }

    #[test]
    fn test_format_track_number() {
        assert_eq!(
            MetadataIdentifier::TrackNumber.format_value("5/12"),
            Some(MetadataValue::Data(vec![0, 0, 0, 5, 0, 0, 0, 12]))
        );
        assert_eq!(MetadataIdentifier::TrackNumber.format_value("five"), None);
    }

    #[test]
    fn test_format_text_passthrough() {
        assert_eq!(
            MetadataIdentifier::Artist.format_value("Someone"),
            Some(MetadataValue::Text("Someone".into()))
        );
    }
}
