//! Voice selection entity
//!
//! The (language, voice name, gender) triple sent to the synthesis service.

use crate::value_objects::{Language, VoiceGender};

/// A concrete voice for one synthesis request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceSelection {
    /// Language tag of the input text
    pub language: Language,
    /// Named voice, e.g. `en-US-Wavenet-F`
    pub name: &'static str,
    /// SSML voice gender
    pub gender: VoiceGender,
}

impl VoiceSelection {
    /// Pick the voice for a language and gender
    ///
    /// | Language | Female            | Male / Neutral    |
    /// |----------|-------------------|-------------------|
    /// | English  | `en-US-Wavenet-F` | `en-US-Wavenet-B` |
    /// | Korean   | `ko-KR-Wavenet-A` | `ko-KR-Wavenet-C` |
    #[must_use]
    pub const fn select(language: Language, gender: VoiceGender) -> Self {
        let name = match (language, gender) {
            (Language::English, VoiceGender::Female) => "en-US-Wavenet-F",
            (Language::English, VoiceGender::Male | VoiceGender::Neutral) => "en-US-Wavenet-B",
            (Language::Korean, VoiceGender::Female) => "ko-KR-Wavenet-A",
            (Language::Korean, VoiceGender::Male | VoiceGender::Neutral) => "ko-KR-Wavenet-C",
        };

        Self {
            language,
            name,
            gender,
        }
    }

    /// Detect the language of `text` and pick the voice for it
    #[must_use]
    pub fn for_text(text: &str, gender: VoiceGender) -> Self {
        Self::select(Language::detect(text), gender)
    }

    /// Language code sent alongside the voice name
    #[must_use]
    pub const fn language_code(&self) -> &'static str {
        self.language.code()
    }
}
