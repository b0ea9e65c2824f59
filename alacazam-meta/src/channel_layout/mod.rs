//! AudioChannelLayout binary format
//!
//! Byte-for-byte image of the native `AudioChannelLayout` structure, always
//! big-endian.
//!
//! # Layout
//! ```text
//! Header (12 bytes):
//! 0x00: tag u32 BE                          - Layout tag ((layout_id << 16) | channels)
//! 0x04: channel_bitmap u32 BE               - Only for USE_CHANNEL_BITMAP, else 0
//! 0x08: number_channel_descriptions u32 BE
//!
//! Channel descriptions (number_channel_descriptions × 20 bytes):
//! 0x00: label u32 BE
//! 0x04: flags u32 BE
//! 0x08: coordinates [f32 BE; 3]
//! ```
//!
//! When descriptions are present their count must match the channel count
//! implied by the tag (see [`ChannelLayout::implied_channel_count`]).

mod decode;
mod encode;
mod types;


// Re-export public API
pub use decode::decode_channel_layout;
pub use encode::{encode_channel_layout, write_channel_layout};
pub use types::{ChannelBitmap, ChannelDescription, ChannelFlags, ChannelLabel, LayoutTag};

use crate::error::MetaError;
use crate::{CHANNEL_DESCRIPTION_SIZE, CHANNEL_LAYOUT_HEADER_SIZE};
use serde::{Deserialize, Serialize};

/// Channel layout descriptor
///
/// Mirrors `AudioChannelLayout`: a tag, a bitmap used only with
/// [`LayoutTag::USE_CHANNEL_BITMAP`], and optional per-channel descriptions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChannelLayout {
    pub tag: LayoutTag,
    #[serde(default)]
    pub channel_bitmap: ChannelBitmap,
    #[serde(default, rename = "channels", skip_serializing_if = "Vec::is_empty")]
    pub channel_descriptions: Vec<ChannelDescription>,
}

impl ChannelLayout {
    /// Layout identified by a predefined tag, without descriptions
    pub fn from_tag(tag: LayoutTag) -> Self {
        Self {
            tag,
            channel_bitmap: ChannelBitmap::empty(),
            channel_descriptions: Vec::new(),
        }
    }

    /// Layout identified by a channel bitmap
    pub fn from_bitmap(bitmap: ChannelBitmap) -> Self {
        Self {
            tag: LayoutTag::USE_CHANNEL_BITMAP,
            channel_bitmap: bitmap,
            channel_descriptions: Vec::new(),
        }
    }

    /// Layout fully described by its channel descriptions
    pub fn from_descriptions(descriptions: Vec<ChannelDescription>) -> Self {
        Self {
            tag: LayoutTag::USE_CHANNEL_DESCRIPTIONS,
            channel_bitmap: ChannelBitmap::empty(),
            channel_descriptions: descriptions,
        }
    }

    /// Channel count implied by the tag
    ///
    /// - `USE_CHANNEL_DESCRIPTIONS`: `None`, the descriptions define the channels
    /// - `USE_CHANNEL_BITMAP`: number of bits set in the bitmap
    /// - any other tag: the low 16 bits of the tag
    pub fn implied_channel_count(&self) -> Option<usize> {
        if self.tag.uses_descriptions() {
            None
        } else if self.tag.uses_bitmap() {
            Some(self.channel_bitmap.bits().count_ones() as usize)
        } else {
            Some(self.tag.channel_count() as usize)
        }
    }

    /// Number of channels this layout describes
    pub fn channel_count(&self) -> usize {
        self.implied_channel_count()
            .unwrap_or(self.channel_descriptions.len())
    }

    /// Bitmap as it is written to the header (empty unless the tag uses it)
    pub fn effective_bitmap(&self) -> ChannelBitmap {
        if self.tag.uses_bitmap() {
            self.channel_bitmap
        } else {
            ChannelBitmap::empty()
        }
    }

    /// Check that present descriptions agree with the tag
    pub fn validate(&self) -> Result<(), MetaError> {
        let actual = self.channel_descriptions.len();
        if actual == 0 {
            return Ok(());
        }
        match self.implied_channel_count() {
            Some(expected) if expected != actual => Err(MetaError::InvalidDescriptor {
                tag: self.tag,
                expected,
                actual,
            }),
            _ => Ok(()),
        }
    }

    /// Encoded size in bytes: 12 + 20 × descriptions
    pub fn encoded_size(&self) -> usize {
        CHANNEL_LAYOUT_HEADER_SIZE + self.channel_descriptions.len() * CHANNEL_DESCRIPTION_SIZE
    }

    /// Encode to an owned byte buffer
    pub fn to_bytes(&self) -> Result<Vec<u8>, MetaError> {
        encode_channel_layout(self)
    }

    /// Decode from an exact byte buffer
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MetaError> {
        decode_channel_layout(bytes)
    }
}
