//! AI Speech - Text-to-Speech synthesis client
//!
//! Provides the synthesis port and its Google Cloud implementation:
//! - `TextToSpeech` - Synthesize speech from text (TTS)
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the trait (port)
//! - `providers` module contains concrete implementations (adapters)
//!
//! # Supported Providers
//!
//! - Google Cloud Text-to-Speech (REST `v1`)
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{GoogleSpeechProvider, SpeechConfig, TextToSpeech};
//! use domain::{AudioEncoding, VoiceGender, VoiceSelection};
//!
//! let provider = GoogleSpeechProvider::new(config)?;
//! let voice = VoiceSelection::for_text("Hello, world!", VoiceGender::Female);
//! let audio = provider.synthesize("Hello, world!", &voice, AudioEncoding::Mp3).await?;
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::SpeechConfig;
pub use error::SpeechError;
pub use ports::TextToSpeech;
pub use providers::google::GoogleSpeechProvider;
pub use types::AudioData;
