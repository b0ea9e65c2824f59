//! Error types for metadata encoding and decoding

use crate::channel_layout::LayoutTag;

/// Errors produced by the channel layout and track number codecs
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetaError {
    /// Description count does not match the channel count implied by the tag
    #[error("invalid channel layout: tag {tag} implies {expected} channel descriptions, got {actual}")]
    InvalidDescriptor {
        tag: LayoutTag,
        expected: usize,
        actual: usize,
    },

    /// Buffer ended before the declared data
    #[error("truncated data: need {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },

    /// Buffer continues past the declared data
    #[error("{0} trailing bytes after channel layout")]
    TrailingBytes(usize),

    /// Fixed-size blob has the wrong length
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Text is not a `number` or `number/count` pair
    #[error("invalid track number: {0:?}")]
    InvalidTrackNumber(String),

    /// Writer failed while streaming an encoded layout
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for MetaError {
    fn from(e: std::io::Error) -> Self {
        MetaError::Io(e.to_string())
    }
}
