//! Value Objects - Immutable, identity-less domain primitives

mod audio_encoding;
mod language;
mod voice_gender;

pub use audio_encoding::AudioEncoding;
pub use language::{Language, is_english_char};
pub use voice_gender::VoiceGender;
