//! Language value object
//!
//! Coarse language classification used only to pick a voice.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Language tag derived from the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English-like text (leading ASCII letters, digits, or common symbols)
    #[serde(rename = "en-US")]
    English,
    /// Everything else
    #[serde(rename = "ko-KR")]
    Korean,
}

impl Language {
    /// Classify text by its leading character
    ///
    /// Text is English when it starts with a run of characters drawn from
    /// `[A-Za-z0-9 $@!%*?&#^-_.+]`, and Korean otherwise. Only the start of
    /// the text is inspected, so `"Hello 안녕"` is English while
    /// `"안녕 hello"` is Korean. Empty text has no leading run and is Korean.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        match text.chars().next() {
            Some(c) if is_english_char(c) => Self::English,
            _ => Self::Korean,
        }
    }

    /// BCP-47 language code sent to the synthesis service
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::English => "en-US",
            Self::Korean => "ko-KR",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Characters that make a leading run "English"
#[must_use]
pub const fn is_english_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            ' ' | '$' | '@' | '!' | '%' | '*' | '?' | '&' | '#' | '^' | '-' | '_' | '.' | '+'
        )
}
