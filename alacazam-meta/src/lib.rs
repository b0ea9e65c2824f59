//! alacazam-meta: binary metadata blobs for alacazam
//!
//! Two fixed-layout encoders used when writing `.m4a` files:
//!
//! - **Channel layouts** - an `AudioChannelLayout` structure packed into an
//!   owned byte buffer, suitable for an encoder's channel layout setting.
//! - **Track numbers** - the `trkn` metadata item, a `(number, count)` pair
//!   packed into 8 bytes.
//!
//! Both encoders are pure functions. Every field is written big-endian, so the
//! output does not depend on the host.
//!
//! # Channel Layout Format
//!
//! ```text
//! Header (12 bytes):
//!   0x00: tag (u32 BE)
//!   0x04: channel_bitmap (u32 BE, 0 unless tag is USE_CHANNEL_BITMAP)
//!   0x08: number_channel_descriptions (u32 BE)
//!
//! Channel description (20 bytes each, repeats):
//!   0x00: label (u32 BE)
//!   0x04: flags (u32 BE)
//!   0x08: coordinates[3] (f32 BE each)
//! ```
//!
//! # Track Number Format
//!
//! ```text
//! 0x00: number (u32 BE)
//! 0x04: count (u32 BE, 0 when the total is unknown)
//! ```
//!
//! # Usage
//!
//! ```
//! use alacazam_meta::{encode_track_number, ChannelLayout, LayoutTag};
//!
//! assert_eq!(encode_track_number(5, 12), [0, 0, 0, 5, 0, 0, 0, 12]);
//!
//! let stereo = ChannelLayout::from_tag(LayoutTag::STEREO);
//! assert_eq!(stereo.to_bytes().unwrap().len(), 12);
//! ```

pub mod channel_layout;
mod error;
pub mod tags;
pub mod track_number;

pub use channel_layout::{
    ChannelBitmap, ChannelDescription, ChannelFlags, ChannelLabel, ChannelLayout, LayoutTag,
    decode_channel_layout, encode_channel_layout, write_channel_layout,
};
pub use error::MetaError;
pub use tags::{InfoKeyMapping, MetadataIdentifier, MetadataValue};
pub use track_number::{TrackNumber, decode_track_number, encode_track_number};

// =============================================================================
// Constants
// =============================================================================

/// Channel layout header size (tag + bitmap + description count)
pub const CHANNEL_LAYOUT_HEADER_SIZE: usize = 12;

/// Size of one encoded channel description (label + flags + 3 coordinates)
pub const CHANNEL_DESCRIPTION_SIZE: usize = 20;

/// Size of an encoded `trkn` blob
pub const TRACK_NUMBER_SIZE: usize = 8;
