//! Channel layout field types
//!
//! Numeric values match the native audio headers so encoded layouts are
//! understood by platform encoders.

use core::fmt;
use serde::{Deserialize, Serialize};

// =============================================================================
// Layout Tag
// =============================================================================

/// Layout tag: `(layout_id << 16) | channel_count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutTag(pub u32);

impl LayoutTag {
    /// Channels are described by the description array
    pub const USE_CHANNEL_DESCRIPTIONS: Self = Self::new(0, 0);
    /// Channels are described by the bitmap
    pub const USE_CHANNEL_BITMAP: Self = Self::new(1, 0);

    pub const MONO: Self = Self::new(100, 1);
    pub const STEREO: Self = Self::new(101, 2);
    pub const STEREO_HEADPHONES: Self = Self::new(102, 2);
    pub const MATRIX_STEREO: Self = Self::new(103, 2);
    pub const MID_SIDE: Self = Self::new(104, 2);
    pub const XY: Self = Self::new(105, 2);
    pub const BINAURAL: Self = Self::new(106, 2);
    pub const AMBISONIC_B_FORMAT: Self = Self::new(107, 4);
    pub const QUADRAPHONIC: Self = Self::new(108, 4);
    pub const PENTAGONAL: Self = Self::new(109, 5);
    pub const HEXAGONAL: Self = Self::new(110, 6);
    pub const OCTAGONAL: Self = Self::new(111, 8);
    pub const CUBE: Self = Self::new(112, 8);
    /// L R C
    pub const MPEG_3_0_A: Self = Self::new(113, 3);
    /// L R C Cs
    pub const MPEG_4_0_A: Self = Self::new(115, 4);
    /// L R C Ls Rs
    pub const MPEG_5_0_A: Self = Self::new(117, 5);
    /// L R C LFE Ls Rs
    pub const MPEG_5_1_A: Self = Self::new(121, 6);
    /// L R C LFE Ls Rs Cs
    pub const MPEG_6_1_A: Self = Self::new(125, 7);
    /// L R C LFE Ls Rs Lc Rc
    pub const MPEG_7_1_A: Self = Self::new(126, 8);
    /// Unknown layout; the low 16 bits carry the channel count
    pub const UNKNOWN: Self = Self(0xFFFF_0000);

    /// Build a tag from a layout id and channel count
    pub const fn new(layout_id: u16, channel_count: u16) -> Self {
        Self(((layout_id as u32) << 16) | channel_count as u32)
    }

    /// Upper 16 bits
    pub const fn layout_id(self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// Lower 16 bits
    pub const fn channel_count(self) -> u16 {
        (self.0 & 0xFFFF) as u16
    }

    pub const fn uses_descriptions(self) -> bool {
        self.0 == Self::USE_CHANNEL_DESCRIPTIONS.0
    }

    pub const fn uses_bitmap(self) -> bool {
        self.0 == Self::USE_CHANNEL_BITMAP.0
    }

    /// Human-readable name for well-known tags
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Self::USE_CHANNEL_DESCRIPTIONS => "UseChannelDescriptions",
            Self::USE_CHANNEL_BITMAP => "UseChannelBitmap",
            Self::MONO => "Mono",
            Self::STEREO => "Stereo",
            Self::STEREO_HEADPHONES => "StereoHeadphones",
            Self::MATRIX_STEREO => "MatrixStereo",
            Self::MID_SIDE => "MidSide",
            Self::XY => "XY",
            Self::BINAURAL => "Binaural",
            Self::AMBISONIC_B_FORMAT => "Ambisonic_B_Format",
            Self::QUADRAPHONIC => "Quadraphonic",
            Self::PENTAGONAL => "Pentagonal",
            Self::HEXAGONAL => "Hexagonal",
            Self::OCTAGONAL => "Octagonal",
            Self::CUBE => "Cube",
            Self::MPEG_3_0_A => "MPEG_3_0_A",
            Self::MPEG_4_0_A => "MPEG_4_0_A",
            Self::MPEG_5_0_A => "MPEG_5_0_A",
            Self::MPEG_5_1_A => "MPEG_5_1_A",
            Self::MPEG_6_1_A => "MPEG_6_1_A",
            Self::MPEG_7_1_A => "MPEG_7_1_A",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for LayoutTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010X}", self.0)
    }
}

impl From<u32> for LayoutTag {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

// =============================================================================
// Channel Label
// =============================================================================

/// Speaker position of a single channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelLabel(pub u32);

impl ChannelLabel {
    pub const UNUSED: Self = Self(0);
    pub const LEFT: Self = Self(1);
    pub const RIGHT: Self = Self(2);
    pub const CENTER: Self = Self(3);
    pub const LFE_SCREEN: Self = Self(4);
    pub const LEFT_SURROUND: Self = Self(5);
    pub const RIGHT_SURROUND: Self = Self(6);
    pub const LEFT_CENTER: Self = Self(7);
    pub const RIGHT_CENTER: Self = Self(8);
    pub const CENTER_SURROUND: Self = Self(9);
    pub const LEFT_SURROUND_DIRECT: Self = Self(10);
    pub const RIGHT_SURROUND_DIRECT: Self = Self(11);
    pub const TOP_CENTER_SURROUND: Self = Self(12);
    pub const REAR_SURROUND_LEFT: Self = Self(33);
    pub const REAR_SURROUND_RIGHT: Self = Self(34);
    pub const MONO: Self = Self(42);
    /// Position given by the description's coordinates
    pub const USE_COORDINATES: Self = Self(100);
    pub const UNKNOWN: Self = Self(0xFFFF_FFFF);
}

impl From<u32> for ChannelLabel {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

// =============================================================================
// Flags
// =============================================================================

bitflags::bitflags! {
    /// Channel bitmap, one bit per speaker position
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ChannelBitmap: u32 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const CENTER = 1 << 2;
        const LFE_SCREEN = 1 << 3;
        const LEFT_SURROUND = 1 << 4;
        const RIGHT_SURROUND = 1 << 5;
        const LEFT_CENTER = 1 << 6;
        const RIGHT_CENTER = 1 << 7;
        const CENTER_SURROUND = 1 << 8;
        const LEFT_SURROUND_DIRECT = 1 << 9;
        const RIGHT_SURROUND_DIRECT = 1 << 10;
        const TOP_CENTER_SURROUND = 1 << 11;
        const VERTICAL_HEIGHT_LEFT = 1 << 12;
        const VERTICAL_HEIGHT_CENTER = 1 << 13;
        const VERTICAL_HEIGHT_RIGHT = 1 << 14;
        const TOP_BACK_LEFT = 1 << 15;
        const TOP_BACK_CENTER = 1 << 16;
        const TOP_BACK_RIGHT = 1 << 17;

        // Keep unnamed bits on decode
        const _ = !0;
    }
}

impl Default for ChannelBitmap {
    fn default() -> Self {
        Self::empty()
    }
}

bitflags::bitflags! {
    /// How a channel description's coordinates are interpreted
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ChannelFlags: u32 {
        const RECTANGULAR_COORDINATES = 1 << 0;
        const SPHERICAL_COORDINATES = 1 << 1;
        const METERS = 1 << 2;

        const _ = !0;
    }
}

impl Default for ChannelFlags {
    fn default() -> Self {
        Self::empty()
    }
}

// =============================================================================
// Channel Description
// =============================================================================

/// Per-channel description (20 bytes encoded)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChannelDescription {
    pub label: ChannelLabel,
    #[serde(default)]
    pub flags: ChannelFlags,
    /// Rectangular (x, y, z) or spherical (azimuth, elevation, distance)
    #[serde(default)]
    pub coordinates: [f32; 3],
}

impl ChannelDescription {
    /// Description with a label only
    pub fn new(label: ChannelLabel) -> Self {
        Self {
            label,
            flags: ChannelFlags::empty(),
            coordinates: [0.0; 3],
        }
    }

    /// Description positioned by coordinates
    pub fn with_coordinates(flags: ChannelFlags, coordinates: [f32; 3]) -> Self {
        Self {
            label: ChannelLabel::USE_COORDINATES,
            flags,
            coordinates,
        }
    }
}
