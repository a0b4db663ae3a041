//! Types for speech synthesis

use domain::AudioEncoding;

/// Synthesized audio returned by a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioData {
    /// Raw audio bytes
    data: Vec<u8>,
    /// Encoding of `data`
    encoding: AudioEncoding,
}

impl AudioData {
    /// Create new audio data
    #[must_use]
    pub const fn new(data: Vec<u8>, encoding: AudioEncoding) -> Self {
        Self { data, encoding }
    }

    /// Get the raw audio bytes
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the raw audio bytes
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Get the audio encoding
    #[must_use]
    pub const fn encoding(&self) -> AudioEncoding {
        self.encoding
    }
}
