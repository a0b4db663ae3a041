//! Port definitions for speech synthesis
//!
//! Defines the trait (port) that synthesis adapters must implement.

use async_trait::async_trait;
use domain::{AudioEncoding, VoiceSelection};
#[cfg(test)]
use mockall::automock;

use crate::error::SpeechError;
use crate::types::AudioData;

/// Port for Text-to-Speech (TTS) implementations
///
/// One call performs exactly one remote request. Implementations must not
/// retry on their own.
///
/// # Example
///
/// ```ignore
/// use ai_speech::TextToSpeech;
/// use domain::{AudioEncoding, VoiceGender, VoiceSelection};
///
/// async fn speak(tts: &impl TextToSpeech) -> Result<Vec<u8>, SpeechError> {
///     let voice = VoiceSelection::for_text("Hello", VoiceGender::Female);
///     let audio = tts.synthesize("Hello", &voice, AudioEncoding::Mp3).await?;
///     Ok(audio.into_data())
/// }
/// ```
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Convert text to speech
    ///
    /// # Arguments
    ///
    /// * `text` - Text to synthesize
    /// * `voice` - Language, voice name and gender to use
    /// * `encoding` - Desired output audio encoding
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if the request fails for any reason.
    async fn synthesize(
        &self,
        text: &str,
        voice: &VoiceSelection,
        encoding: AudioEncoding,
    ) -> Result<AudioData, SpeechError>;

    /// Name of the backing service, for logs
    fn provider_name(&self) -> &'static str;
}
