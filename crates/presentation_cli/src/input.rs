//! Input text resolution

use std::path::Path;

use application::ApplicationError;
use tracing::debug;

use crate::cli::InputSource;

/// Resolve the text to speak
///
/// File contents must be UTF-8; trailing line terminators are dropped so a
/// file ending in a newline names the same output as the inline text.
pub async fn read_input(source: InputSource) -> Result<String, ApplicationError> {
    match source {
        InputSource::Text(text) => Ok(text),
        InputSource::File(path) => read_text_file(&path).await,
    }
}

async fn read_text_file(path: &Path) -> Result<String, ApplicationError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        ApplicationError::InvalidArguments(format!(
            "cannot read input file {}: {e}",
            path.display()
        ))
    })?;

    let text = String::from_utf8(bytes).map_err(|_| {
        ApplicationError::InvalidArguments(format!(
            "input file {} is not valid UTF-8",
            path.display()
        ))
    })?;

    let trimmed = text.trim_end_matches(['\r', '\n']);
    debug!(path = %path.display(), text_len = trimmed.len(), "Read input file");
    Ok(trimmed.to_string())
}
