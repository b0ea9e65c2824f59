//! Channel layout decoding

use super::{
    ChannelBitmap, ChannelDescription, ChannelFlags, ChannelLabel, ChannelLayout, LayoutTag,
};
use crate::error::MetaError;
use crate::{CHANNEL_DESCRIPTION_SIZE, CHANNEL_LAYOUT_HEADER_SIZE};
use byteorder::{BigEndian, ReadBytesExt};
use std::io::{Cursor, Read};

/// Decode a channel layout from a buffer holding exactly one encoded layout
pub fn decode_channel_layout(bytes: &[u8]) -> Result<ChannelLayout, MetaError> {
    if bytes.len() < CHANNEL_LAYOUT_HEADER_SIZE {
        return Err(MetaError::Truncated {
            needed: CHANNEL_LAYOUT_HEADER_SIZE,
            available: bytes.len(),
        });
    }

    let mut cursor = Cursor::new(bytes);
    let tag = LayoutTag(cursor.read_u32::<BigEndian>()?);
    let channel_bitmap = ChannelBitmap::from_bits_retain(cursor.read_u32::<BigEndian>()?);
    let description_count = cursor.read_u32::<BigEndian>()? as usize;

    let needed = description_count
        .saturating_mul(CHANNEL_DESCRIPTION_SIZE)
        .saturating_add(CHANNEL_LAYOUT_HEADER_SIZE);
    if bytes.len() < needed {
        return Err(MetaError::Truncated {
            needed,
            available: bytes.len(),
        });
    }
    if bytes.len() > needed {
        return Err(MetaError::TrailingBytes(bytes.len() - needed));
    }

    let mut channel_descriptions = Vec::with_capacity(description_count);
    for _ in 0..description_count {
        channel_descriptions.push(read_description(&mut cursor)?);
    }

    let mut layout = ChannelLayout {
        tag,
        channel_bitmap,
        channel_descriptions,
    };
    // The bitmap field is only meaningful for USE_CHANNEL_BITMAP
    layout.channel_bitmap = layout.effective_bitmap();
    layout.validate()?;
    Ok(layout)
}

/// Read one 20-byte channel description
fn read_description<R: Read>(reader: &mut R) -> Result<ChannelDescription, MetaError> {
    let label = ChannelLabel(reader.read_u32::<BigEndian>()?);
    let flags = ChannelFlags::from_bits_retain(reader.read_u32::<BigEndian>()?);
    let mut coordinates = [0.0f32; 3];
    reader.read_f32_into::<BigEndian>(&mut coordinates)?;
    Ok(ChannelDescription {
        label,
        flags,
        coordinates,
    })
}
