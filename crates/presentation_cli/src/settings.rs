//! Configuration loading
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. `text2speech.toml` in the working directory, or the `--config` file
//! 3. `TEXT2SPEECH_*` environment variables (e.g. `TEXT2SPEECH_API_KEY`)
//!
//! `GOOGLE_API_KEY` fills in the API key when none of the above set it.

use std::collections::HashMap;
use std::path::Path;

use ai_speech::SpeechConfig;
use tracing::debug;

/// Default configuration file stem, looked up in the working directory
pub const DEFAULT_CONFIG_NAME: &str = "text2speech";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "TEXT2SPEECH";

/// Conventional Google API key variable
pub const GOOGLE_API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Load the speech configuration from files and the process environment
pub fn load_speech_config(path: Option<&Path>) -> Result<SpeechConfig, config::ConfigError> {
    let config = build_config(path, None)?;
    Ok(with_google_api_key(config, |name| std::env::var(name).ok()))
}

/// Build the layered configuration
///
/// `env` replaces the process environment when given.
fn build_config(
    path: Option<&Path>,
    env: Option<HashMap<String, String>>,
) -> Result<SpeechConfig, config::ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    let builder = config::Config::builder()
        // Load from file if exists
        .add_source(file)
        // Override with environment variables (e.g., TEXT2SPEECH_TIMEOUT_MS)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX).source(env.map(|vars| {
                vars.into_iter().collect()
            })),
        );

    let config: SpeechConfig = builder.build()?.try_deserialize()?;
    debug!(config = ?config, "Speech configuration loaded");
    Ok(config)
}

/// Fall back to `GOOGLE_API_KEY` when no API key was configured
fn with_google_api_key(
    mut config: SpeechConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> SpeechConfig {
    if config.api_key.is_none() {
        config.api_key = lookup(GOOGLE_API_KEY_VAR).filter(|key| !key.trim().is_empty());
    }
    config
}
