//! Voice gender value object

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::DomainError;

/// Requested voice gender
///
/// Also serves as the SSML voice gender sent to the synthesis service,
/// which uses the same three upper-case names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum VoiceGender {
    /// Female voice
    #[default]
    Female,
    /// Male voice
    Male,
    /// Neutral voice
    Neutral,
}

impl VoiceGender {
    /// Canonical upper-case name
    ///
    /// These bytes take part in the default output file name, so they must
    /// stay stable.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "FEMALE",
            Self::Male => "MALE",
            Self::Neutral => "NEUTRAL",
        }
    }

    /// All genders in declaration order
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Female, Self::Male, Self::Neutral]
    }
}

impl fmt::Display for VoiceGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoiceGender {
    type Err = DomainError;

    /// Parse case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FEMALE" => Ok(Self::Female),
            "MALE" => Ok(Self::Male),
            "NEUTRAL" => Ok(Self::Neutral),
            _ => Err(DomainError::InvalidGender(s.to_string())),
        }
    }
}
