//! Conversion service - text in, audio file out
//!
//! Orchestrates one conversion: classify the text, pick a voice, resolve
//! encoding and output path, call the synthesizer once, write the file.

use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
    time::Instant,
};

use ai_speech::TextToSpeech;
use domain::{AudioEncoding, VoiceGender, VoiceSelection};
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    services::{
        audio_writer::AudioWriter,
        output_policy::{choose_encoding, resolve_output_path},
    },
};

/// Input for one conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Text to speak
    pub text: String,
    /// Requested voice gender
    pub gender: VoiceGender,
    /// Encoding from the `-mp3`/`-wav` flags, before the output path is considered
    pub encoding: AudioEncoding,
    /// Explicit output path, if any
    pub output: Option<PathBuf>,
}

impl ConversionRequest {
    /// Create a request with the default gender and encoding
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            gender: VoiceGender::default(),
            encoding: AudioEncoding::default(),
            output: None,
        }
    }

    /// Set the voice gender
    #[must_use]
    pub const fn with_gender(mut self, gender: VoiceGender) -> Self {
        self.gender = gender;
        self
    }

    /// Set the flag-derived encoding
    #[must_use]
    pub const fn with_encoding(mut self, encoding: AudioEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set an explicit output path
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }
}

/// Everything decided before the remote call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionPlan {
    /// Voice to synthesize with
    pub voice: VoiceSelection,
    /// Encoding to request; agrees with the output extension when recognized
    pub encoding: AudioEncoding,
    /// Where the audio will be written
    pub output_path: PathBuf,
}

impl ConversionPlan {
    /// Resolve voice, encoding and output path for a request
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::InvalidArguments` for empty or
    /// whitespace-only text.
    pub fn for_request(request: &ConversionRequest) -> Result<Self, ApplicationError> {
        if request.text.trim().is_empty() {
            return Err(ApplicationError::InvalidArguments(
                "input text is empty".to_string(),
            ));
        }

        let voice = VoiceSelection::for_text(&request.text, request.gender);
        let encoding = choose_encoding(request.encoding, request.output.as_deref());
        let output_path = resolve_output_path(
            request.output.as_deref(),
            &request.text,
            request.gender,
            encoding,
        );

        Ok(Self {
            voice,
            encoding,
            output_path,
        })
    }
}

/// Result of a completed conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    /// The plan that was executed
    pub plan: ConversionPlan,
    /// Bytes written to `plan.output_path`
    pub size_bytes: u64,
    /// Wall-clock duration of synthesis plus write
    pub duration_ms: u64,
}

impl ConversionOutcome {
    /// Path of the written file
    pub fn output_path(&self) -> &Path {
        &self.plan.output_path
    }
}

/// Service that converts text into an audio file
pub struct ConversionService {
    tts: Arc<dyn TextToSpeech>,
    writer: AudioWriter,
}

impl fmt::Debug for ConversionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionService")
            .field("provider", &self.tts.provider_name())
            .finish_non_exhaustive()
    }
}

impl ConversionService {
    /// Create a new conversion service
    pub fn new(tts: Arc<dyn TextToSpeech>) -> Self {
        Self {
            tts,
            writer: AudioWriter::new(),
        }
    }

    /// Convert the request's text and write the audio file
    ///
    /// The synthesizer is called exactly once. When it fails nothing is
    /// written, so an existing file at the output path is left untouched.
    #[instrument(skip(self, request), fields(text_len = request.text.len(), gender = %request.gender))]
    pub async fn convert(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionOutcome, ApplicationError> {
        let start = Instant::now();
        let plan = ConversionPlan::for_request(request)?;

        debug!(
            provider = self.tts.provider_name(),
            language = %plan.voice.language,
            voice = plan.voice.name,
            encoding = %plan.encoding,
            output = %plan.output_path.display(),
            "Conversion planned"
        );

        let audio = self
            .tts
            .synthesize(&request.text, &plan.voice, plan.encoding)
            .await?;

        let size_bytes = self
            .writer
            .write(&plan.output_path, audio.into_data())
            .await?;

        #[allow(clippy::cast_possible_truncation)]
        let duration_ms = start.elapsed().as_millis() as u64;

        info!(
            output = %plan.output_path.display(),
            size_bytes,
            duration_ms,
            "Conversion complete"
        );

        Ok(ConversionOutcome {
            plan,
            size_bytes,
            duration_ms,
        })
    }
}
