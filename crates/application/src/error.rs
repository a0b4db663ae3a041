//! Application-level errors

use std::io;
use std::path::PathBuf;

use ai_speech::SpeechError;
use thiserror::Error;

/// Errors that can occur while converting text to an audio file
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Required input is missing or unusable
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The remote synthesis call failed; nothing was written
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(#[from] SpeechError),

    /// The audio could not be written to disk
    #[error("Failed to write {}: {source}", path.display())]
    FileWriteFailed {
        /// Destination that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl ApplicationError {
    /// Check if this error is caused by the caller's input
    pub const fn is_usage_error(&self) -> bool {
        matches!(self, Self::InvalidArguments(_))
    }
}
