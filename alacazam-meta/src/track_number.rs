//! Track number (`trkn`) blob
//!
//! ```text
//! 0x00: number u32 BE
//! 0x04: count u32 BE   - 0 when the total is unknown
//! ```

use crate::TRACK_NUMBER_SIZE;
use crate::error::MetaError;
use byteorder::{BigEndian, ByteOrder};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Track position within an album
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TrackNumber {
    pub number: u32,
    /// Total tracks, 0 if unknown
    #[serde(default)]
    pub count: u32,
}

impl TrackNumber {
    pub const SIZE: usize = TRACK_NUMBER_SIZE;

    pub fn new(number: u32, count: u32) -> Self {
        Self { number, count }
    }

    /// Write to the 8-byte blob
    pub fn to_bytes(&self) -> [u8; TRACK_NUMBER_SIZE] {
        encode_track_number(self.number, self.count)
    }

    /// Read from an 8-byte blob
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MetaError> {
        decode_track_number(bytes)
    }
}

/// Encode a `(number, count)` pair as 8 big-endian bytes
pub fn encode_track_number(number: u32, count: u32) -> [u8; TRACK_NUMBER_SIZE] {
    let mut bytes = [0u8; TRACK_NUMBER_SIZE];
    BigEndian::write_u32(&mut bytes[0..4], number);
    BigEndian::write_u32(&mut bytes[4..8], count);
    bytes
}

/// Decode an 8-byte `trkn` blob
pub fn decode_track_number(bytes: &[u8]) -> Result<TrackNumber, MetaError> {
    if bytes.len() != TRACK_NUMBER_SIZE {
        return Err(MetaError::InvalidLength {
            expected: TRACK_NUMBER_SIZE,
            actual: bytes.len(),
        });
    }
    Ok(TrackNumber {
        number: BigEndian::read_u32(&bytes[0..4]),
        count: BigEndian::read_u32(&bytes[4..8]),
    })
}

impl FromStr for TrackNumber {
    type Err = MetaError;

    /// Parse `"n"` or `"n/m"`
    ///
    /// Empty parts are skipped, so `"5/"` and `"/5"` both read as track 5.
    /// Parts are not trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MetaError::InvalidTrackNumber(s.to_string());
        let parse_part = |part: &str| part.parse::<u32>().map_err(|_| invalid());

        let parts: Vec<&str> = s.split('/').filter(|part| !part.is_empty()).collect();
        match parts.as_slice() {
            [number] => Ok(Self {
                number: parse_part(*number)?,
                count: 0,
            }),
            [number, count] => Ok(Self {
                number: parse_part(*number)?,
                count: parse_part(*count)?,
            }),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for TrackNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 0 {
            write!(f, "{}", self.number)
        } else {
            write!(f, "{}/{}", self.number, self.count)
        }
    }
}
