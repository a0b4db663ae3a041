//! Audio encoding value object
//!
//! The "Audio Format Choice": compressed MP3 or uncompressed linear PCM.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Audio encoding requested from the synthesis service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AudioEncoding {
    /// MP3 (compressed, lossy)
    #[default]
    #[serde(rename = "MP3")]
    Mp3,
    /// 16-bit linear PCM in a WAV container (uncompressed)
    #[serde(rename = "LINEAR16")]
    Linear16,
}

impl AudioEncoding {
    /// Map the compressed/uncompressed flag to an encoding
    #[must_use]
    pub const fn from_compressed(compressed: bool) -> Self {
        if compressed { Self::Mp3 } else { Self::Linear16 }
    }

    /// Whether this encoding is compressed
    #[must_use]
    pub const fn is_compressed(&self) -> bool {
        matches!(self, Self::Mp3)
    }

    /// File extension written to disk, without the dot
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Linear16 => "wav",
        }
    }

    /// Encoding name on the wire
    #[must_use]
    pub const fn api_name(&self) -> &'static str {
        match self {
            Self::Mp3 => "MP3",
            Self::Linear16 => "LINEAR16",
        }
    }

    /// Parse a file extension (case-insensitive, with or without leading dot)
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        if ext.eq_ignore_ascii_case("mp3") {
            Some(Self::Mp3)
        } else if ext.eq_ignore_ascii_case("wav") {
            Some(Self::Linear16)
        } else {
            None
        }
    }
}

impl fmt::Display for AudioEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_name())
    }
}
