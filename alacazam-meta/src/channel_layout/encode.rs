//! Channel layout encoding

use super::{ChannelDescription, ChannelLayout, LayoutTag};
use crate::error::MetaError;
use byteorder::{BigEndian, WriteBytesExt};
use std::io::Write;

/// Encode a channel layout into an owned byte buffer
///
/// Output is `12 + 20 × n` bytes for `n` channel descriptions. Fails with
/// [`MetaError::InvalidDescriptor`] when the descriptions disagree with the tag.
pub fn encode_channel_layout(layout: &ChannelLayout) -> Result<Vec<u8>, MetaError> {
    let mut buffer = Vec::with_capacity(layout.encoded_size());
    write_channel_layout(&mut buffer, layout)?;
    Ok(buffer)
}

/// Encode a channel layout into a writer
pub fn write_channel_layout<W: Write>(
    writer: &mut W,
    layout: &ChannelLayout,
) -> Result<(), MetaError> {
    layout.validate()?;

    if !layout.tag.uses_bitmap() && !layout.channel_bitmap.is_empty() {
        tracing::debug!(
            "Ignoring channel bitmap {:#010X} for layout tag {}",
            layout.channel_bitmap.bits(),
            layout.tag
        );
    }

    // Header
    writer.write_u32::<BigEndian>(layout.tag.0)?;
    writer.write_u32::<BigEndian>(layout.effective_bitmap().bits())?;
    writer.write_u32::<BigEndian>(description_count(layout)?)?;

    for description in &layout.channel_descriptions {
        write_description(writer, description)?;
    }

    Ok(())
}

/// Description count as stored in the header
pub(super) fn description_count(layout: &ChannelLayout) -> Result<u32, MetaError> {
    description_count_from_len(layout.tag, layout.channel_descriptions.len())
}

pub(super) fn description_count_from_len(
    tag: LayoutTag,
    actual: usize,
) -> Result<u32, MetaError> {
    u32::try_from(actual).map_err(|_| MetaError::InvalidDescriptor {
        tag,
        expected: u32::MAX as usize,
        actual,
    })
}

/// Write one 20-byte channel description
fn write_description<W: Write>(
    writer: &mut W,
    description: &ChannelDescription,
) -> Result<(), MetaError> {
    writer.write_u32::<BigEndian>(description.label.0)?;
    writer.write_u32::<BigEndian>(description.flags.bits())?;
    for coordinate in description.coordinates {
        writer.write_f32::<BigEndian>(coordinate)?;
    }
    Ok(())
}
