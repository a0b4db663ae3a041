//! Application layer - Use cases and orchestration
//!
//! Output policy (encoding and file naming), the audio file writer, and the
//! conversion service that drives a `TextToSpeech` port.

pub mod error;
pub mod services;

pub use error::ApplicationError;
pub use services::*;
