//! Google Cloud Text-to-Speech provider
//!
//! Implements `TextToSpeech` against the `text:synthesize` REST endpoint.
//!
//! # Authentication
//!
//! - API key: appended as the `key` query parameter
//! - OAuth2 access token: sent as `Authorization: Bearer <token>`
//!
//! Both may be configured; the service accepts either.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use domain::{AudioEncoding, VoiceSelection};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::TextToSpeech;
use crate::types::AudioData;

/// Maximum input size accepted by the service, in bytes
pub const MAX_INPUT_BYTES: usize = 5000;

/// Google Cloud Text-to-Speech provider
#[derive(Debug, Clone)]
pub struct GoogleSpeechProvider {
    client: Client,
    config: SpeechConfig,
}

impl GoogleSpeechProvider {
    /// Create a new Google speech provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Build the synthesis endpoint URL
    fn synthesize_url(&self) -> String {
        format!(
            "{}/text:synthesize",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Map a non-success response to a `SpeechError`
    fn error_from_response(status: StatusCode, body: &str, voice: &str) -> SpeechError {
        let detail = serde_json::from_str::<ApiError>(body).ok().map(|e| e.error);
        let api_status = detail.as_ref().and_then(|d| d.status.as_deref());
        let message = detail
            .as_ref()
            .map_or_else(|| format!("HTTP {status}: {body}"), |d| d.message.clone());

        match (status, api_status) {
            (StatusCode::TOO_MANY_REQUESTS, _) | (_, Some("RESOURCE_EXHAUSTED")) => {
                SpeechError::RateLimited
            },
            (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN, _)
            | (_, Some("UNAUTHENTICATED" | "PERMISSION_DENIED")) => {
                SpeechError::Authentication(message)
            },
            (_, Some("NOT_FOUND")) if message.contains("voice") => {
                SpeechError::VoiceNotFound(voice.to_string())
            },
            _ => SpeechError::SynthesisFailed(message),
        }
    }
}

/// `text:synthesize` request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelectionParams<'a>,
    audio_config: AudioConfig,
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelectionParams<'a> {
    language_code: &'a str,
    name: &'a str,
    ssml_gender: domain::VoiceGender,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: AudioEncoding,
}

impl<'a> SynthesizeRequest<'a> {
    const fn new(text: &'a str, voice: &'a VoiceSelection, encoding: AudioEncoding) -> Self {
        Self {
            input: SynthesisInput { text },
            voice: VoiceSelectionParams {
                language_code: voice.language_code(),
                name: voice.name,
                ssml_gender: voice.gender,
            },
            audio_config: AudioConfig {
                audio_encoding: encoding,
            },
        }
    }
}

/// `text:synthesize` response body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    #[serde(default)]
    audio_content: String,
}

/// Google API error envelope
#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

#[async_trait]
impl TextToSpeech for GoogleSpeechProvider {
    #[instrument(skip(self, text), fields(text_len = text.len(), voice = voice.name, encoding = %encoding))]
    async fn synthesize(
        &self,
        text: &str,
        voice: &VoiceSelection,
        encoding: AudioEncoding,
    ) -> Result<AudioData, SpeechError> {
        debug!("Synthesizing speech with Google Cloud Text-to-Speech");

        if text.is_empty() {
            return Err(SpeechError::SynthesisFailed(
                "Text cannot be empty".to_string(),
            ));
        }

        if text.len() > MAX_INPUT_BYTES {
            return Err(SpeechError::SynthesisFailed(format!(
                "Text too long: {} bytes exceeds {MAX_INPUT_BYTES} limit",
                text.len()
            )));
        }

        let request = SynthesizeRequest::new(text, voice, encoding);

        let mut builder = self.client.post(self.synthesize_url()).json(&request);
        if let Some(key) = &self.config.api_key {
            builder = builder.query(&[("key", key)]);
        }
        if let Some(token) = &self.config.access_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(project) = &self.config.quota_project {
            builder = builder.header("x-goog-user-project", project);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| SpeechError::from_transport(&e, self.config.timeout_ms))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(Self::error_from_response(status, &error_body, voice.name));
        }

        let body: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        if body.audio_content.is_empty() {
            return Err(SpeechError::InvalidResponse(
                "Response contained no audio content".to_string(),
            ));
        }

        let audio = BASE64
            .decode(body.audio_content.as_bytes())
            .map_err(|e| SpeechError::InvalidResponse(format!("Invalid audio content: {e}")))?;

        debug!(audio_size = audio.len(), "Speech synthesis complete");

        Ok(AudioData::new(audio, encoding))
    }

    fn provider_name(&self) -> &'static str {
        "google-cloud-tts"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Language, VoiceGender};
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_provider(mock_server: &MockServer) -> GoogleSpeechProvider {
        let config = SpeechConfig {
            api_key: Some("test-api-key".to_string()),
            base_url: mock_server.uri(),
            ..Default::default()
        };
        GoogleSpeechProvider::new(config).unwrap()
    }

    fn english_female() -> VoiceSelection {
        VoiceSelection::select(Language::English, VoiceGender::Female)
    }

    #[test]
    fn new_rejects_missing_credentials() {
        let result = GoogleSpeechProvider::new(SpeechConfig::default());
        assert!(matches!(result, Err(SpeechError::Configuration(_))));
    }

    #[test]
    fn synthesize_url_trims_trailing_slash() {
        let provider = GoogleSpeechProvider::new(SpeechConfig {
            base_url: "http://localhost:8080/v1/".to_string(),
            ..SpeechConfig::test()
        })
        .unwrap();
        assert_eq!(
            provider.synthesize_url(),
            "http://localhost:8080/v1/text:synthesize"
        );
    }

    #[test]
    fn request_serializes_google_shape() {
        let voice = VoiceSelection::select(Language::Korean, VoiceGender::Male);
        let request = SynthesizeRequest::new("안녕", &voice, AudioEncoding::Linear16);

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "input": { "text": "안녕" },
                "voice": {
                    "languageCode": "ko-KR",
                    "name": "ko-KR-Wavenet-C",
                    "ssmlGender": "MALE"
                },
                "audioConfig": { "audioEncoding": "LINEAR16" }
            })
        );
    }

    #[tokio::test]
    async fn synthesize_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/text:synthesize"))
            .and(query_param("key", "test-api-key"))
            .and(body_json(serde_json::json!({
                "input": { "text": "Hello world" },
                "voice": {
                    "languageCode": "en-US",
                    "name": "en-US-Wavenet-F",
                    "ssmlGender": "FEMALE"
                },
                "audioConfig": { "audioEncoding": "MP3" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "audioContent": BASE64.encode([0xFF, 0xFB, 0x90, 0x00])
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server);
        let audio = provider
            .synthesize("Hello world", &english_female(), AudioEncoding::Mp3)
            .await
            .unwrap();

        assert_eq!(audio.data(), &[0xFF, 0xFB, 0x90, 0x00]);
        assert_eq!(audio.encoding(), AudioEncoding::Mp3);
    }

    #[tokio::test]
    async fn synthesize_sends_bearer_token_and_quota_project() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/text:synthesize"))
            .and(header("authorization", "Bearer ya29.test"))
            .and(header("x-goog-user-project", "billing-project"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "audioContent": BASE64.encode(b"RIFF")
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = GoogleSpeechProvider::new(SpeechConfig {
            access_token: Some("ya29.test".to_string()),
            quota_project: Some("billing-project".to_string()),
            base_url: mock_server.uri(),
            ..Default::default()
        })
        .unwrap();

        let audio = provider
            .synthesize("Hello", &english_female(), AudioEncoding::Linear16)
            .await
            .unwrap();

        assert_eq!(audio.data(), b"RIFF");
    }

    #[tokio::test]
    async fn synthesize_empty_text_fails() {
        let mock_server = MockServer::start().await;
        let provider = create_test_provider(&mock_server);

        let result = provider
            .synthesize("", &english_female(), AudioEncoding::Mp3)
            .await;

        assert!(matches!(result, Err(SpeechError::SynthesisFailed(_))));
    }

    #[tokio::test]
    async fn synthesize_text_too_long_fails() {
        let mock_server = MockServer::start().await;
        let provider = create_test_provider(&mock_server);
        let text = "a".repeat(MAX_INPUT_BYTES + 1);

        let result = provider
            .synthesize(&text, &english_female(), AudioEncoding::Mp3)
            .await;

        assert!(matches!(result, Err(SpeechError::SynthesisFailed(_))));
    }

    #[tokio::test]
    async fn synthesize_rate_limited() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/text:synthesize"))
            .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
                "error": {
                    "code": 429,
                    "message": "Quota exceeded",
                    "status": "RESOURCE_EXHAUSTED"
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server);
        let result = provider
            .synthesize("Hello", &english_female(), AudioEncoding::Mp3)
            .await;

        assert!(matches!(result, Err(SpeechError::RateLimited)));
    }

    #[tokio::test]
    async fn synthesize_invalid_key() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/text:synthesize"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": {
                    "code": 400,
                    "message": "API key not valid. Please pass a valid API key.",
                    "status": "INVALID_ARGUMENT"
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server);
        let result = provider
            .synthesize("Hello", &english_female(), AudioEncoding::Mp3)
            .await;

        match result {
            Err(SpeechError::SynthesisFailed(message)) => {
                assert!(message.contains("API key not valid"));
            },
            other => panic!("Expected SynthesisFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn synthesize_permission_denied() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/text:synthesize"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "error": {
                    "code": 403,
                    "message": "Cloud Text-to-Speech API has not been used in project",
                    "status": "PERMISSION_DENIED"
                }
            })))
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server);
        let result = provider
            .synthesize("Hello", &english_female(), AudioEncoding::Mp3)
            .await;

        assert!(matches!(result, Err(SpeechError::Authentication(_))));
    }

    #[tokio::test]
    async fn synthesize_unknown_voice() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/text:synthesize"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": {
                    "code": 404,
                    "message": "Requested voice not found",
                    "status": "NOT_FOUND"
                }
            })))
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server);
        let result = provider
            .synthesize("Hello", &english_female(), AudioEncoding::Mp3)
            .await;

        match result {
            Err(SpeechError::VoiceNotFound(voice)) => assert_eq!(voice, "en-US-Wavenet-F"),
            other => panic!("Expected VoiceNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn synthesize_non_json_error_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/text:synthesize"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server);
        let result = provider
            .synthesize("Hello", &english_female(), AudioEncoding::Mp3)
            .await;

        match result {
            Err(SpeechError::SynthesisFailed(message)) => {
                assert!(message.contains("502"));
                assert!(message.contains("Bad Gateway"));
            },
            other => panic!("Expected SynthesisFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn synthesize_missing_audio_content() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/text:synthesize"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server);
        let result = provider
            .synthesize("Hello", &english_female(), AudioEncoding::Mp3)
            .await;

        assert!(matches!(result, Err(SpeechError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn synthesize_invalid_base64() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/text:synthesize"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "audioContent": "not base64!!"
            })))
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server);
        let result = provider
            .synthesize("Hello", &english_female(), AudioEncoding::Mp3)
            .await;

        assert!(matches!(result, Err(SpeechError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn synthesize_times_out() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/text:synthesize"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "audioContent": "AAAA" }))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let provider = GoogleSpeechProvider::new(SpeechConfig {
            api_key: Some("test-api-key".to_string()),
            base_url: mock_server.uri(),
            timeout_ms: 50,
            ..Default::default()
        })
        .unwrap();

        let result = provider
            .synthesize("Hello", &english_female(), AudioEncoding::Mp3)
            .await;

        assert!(matches!(result, Err(SpeechError::Timeout(50))));
    }

    #[tokio::test]
    async fn synthesize_connection_refused() {
        let provider = GoogleSpeechProvider::new(SpeechConfig {
            api_key: Some("test-api-key".to_string()),
            base_url: "http://127.0.0.1:1".to_string(),
            ..Default::default()
        })
        .unwrap();

        let result = provider
            .synthesize("Hello", &english_female(), AudioEncoding::Mp3)
            .await;

        assert!(matches!(
            result,
            Err(SpeechError::ConnectionFailed(_) | SpeechError::RequestFailed(_))
        ));
    }

    #[test]
    fn provider_name() {
        let provider = GoogleSpeechProvider::new(SpeechConfig::test()).unwrap();
        assert_eq!(provider.provider_name(), "google-cloud-tts");
    }
}
