//! Domain entities

mod voice_selection;

pub use voice_selection::VoiceSelection;
