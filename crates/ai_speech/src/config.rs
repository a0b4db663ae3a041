//! Configuration for the synthesis client

use serde::{Deserialize, Serialize};

/// Configuration for the Google Cloud Text-to-Speech client
#[derive(Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// API key, sent as the `key` query parameter
    #[serde(default)]
    pub api_key: Option<String>,

    /// OAuth2 access token, sent as a bearer token
    #[serde(default)]
    pub access_token: Option<String>,

    /// Project billed for quota, sent as `x-goog-user-project`
    #[serde(default)]
    pub quota_project: Option<String>,

    /// API base URL (for custom endpoints and tests)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "https://texttospeech.googleapis.com/v1".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            access_token: None,
            quota_project: None,
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl std::fmt::Debug for SpeechConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field("quota_project", &self.quota_project)
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl SpeechConfig {
    /// Create a minimal config for testing
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        }
    }

    /// Whether any credential is configured
    #[must_use]
    pub const fn has_credentials(&self) -> bool {
        self.api_key.is_some() || self.access_token.is_some()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !self.has_credentials() {
            return Err(
                "An API key or access token is required for Google Cloud Text-to-Speech"
                    .to_string(),
            );
        }

        if self.base_url.trim().is_empty() {
            return Err("Base URL must not be empty".to_string());
        }

        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}
