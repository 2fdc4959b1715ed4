//! Gemini TTS client adapter.
//!
//! A thin call-and-translate layer over the Generative Language REST API:
//! build a `generateContent` request from SSML markup plus voice/model
//! identifiers, extract the base64-encoded PCM payload from the response, or
//! fail with a typed error. One network round-trip per call; no caching, no
//! retries, no timeout beyond the transport default.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ureq::Agent;

use crate::{SpeechRequest, SpeechSynthesizer};

/// Production endpoint of the Generative Language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini prebuilt voice used when none is given. Kore is one of the allowed
/// voices.
pub const DEFAULT_VOICE: &str = "Kore";

/// Gemini model identifier used when none is given.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-tts";

/// Failure at the synthesis service boundary.
#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("speech service request failed: {0}")]
    Transport(#[from] ureq::Error),
    #[error("speech service response was not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("speech service response did not include audio data")]
    MissingAudio,
    #[error("audio payload was not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("synthesis markup must not be empty")]
    EmptyMarkup,
}

/// Connection parameters for the Gemini client.
///
/// The API key is an explicit dependency here; reading it from the
/// environment is the CLI boundary's job. `base_url` exists so tests can
/// point the client at a local stub server.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct GeminiConfig {
    /// API key, sent as the `key` query parameter.
    pub api_key: String,
    /// Base URL of the Generative Language API.
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    pub base_url: String,
}

/// Blocking Gemini TTS client.
pub struct GeminiTts {
    config: GeminiConfig,
    agent: Agent,
}

impl GeminiTts {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            agent: Agent::new_with_defaults(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.base_url.trim_end_matches('/'),
            model,
            self.config.api_key
        )
    }
}

impl SpeechSynthesizer for GeminiTts {
    fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, SynthesisError> {
        if request.markup.trim().is_empty() {
            return Err(SynthesisError::EmptyMarkup);
        }

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: request.markup,
                }],
            }],
            generation_config: GenerationConfig {
                response_modalities: ["AUDIO"],
                speech_config: SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: request.voice,
                        },
                    },
                },
            },
        };

        log::debug!(
            "requesting synthesis: model={}, voice={}",
            request.model,
            request.voice
        );

        let response = self
            .agent
            .post(&self.endpoint(request.model))
            .send_json(&body)?;
        let text = response.into_body().read_to_string()?;

        let parsed: GenerateContentResponse = serde_json::from_str(&text)?;
        let encoded = extract_audio_payload(&parsed).ok_or(SynthesisError::MissingAudio)?;
        let pcm = STANDARD.decode(encoded)?;

        log::debug!("received {} bytes of PCM audio", pcm.len());
        Ok(pcm)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_modalities: [&'static str; 1],
    speech_config: SpeechConfig<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechConfig<'a> {
    voice_config: VoiceConfig<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig<'a> {
    prebuilt_voice_config: PrebuiltVoiceConfig<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig<'a> {
    voice_name: &'a str,
}

/// Response model, every level optional so a missing audio path becomes a
/// `MissingAudio` error instead of a parse failure or panic.
#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    inline_data: Option<InlineData>,
}

#[derive(Deserialize, Debug)]
struct InlineData {
    data: Option<String>,
}

/// Walk `candidates[0].content.parts[*].inlineData.data`.
fn extract_audio_payload(response: &GenerateContentResponse) -> Option<&str> {
    response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .iter()
        .find_map(|part| part.inline_data.as_ref()?.data.as_deref())
}

#[cfg(test)]
mod tests {
    use super::{
        extract_audio_payload, GeminiConfigBuilder, GeminiTts, GenerateContentResponse,
        SynthesisError, STANDARD,
    };
    use crate::{SpeechRequest, SpeechSynthesizer};
    use base64::Engine as _;
    use serde_json::json;

    const MARKUP: &str = "<speak><phoneme alphabet='ipa' ph='p'>p</phoneme></speak>";

    fn request() -> SpeechRequest<'static> {
        SpeechRequest {
            markup: MARKUP,
            voice: "Kore",
            model: "test-model",
        }
    }

    fn client_for(server: &mockito::ServerGuard) -> GeminiTts {
        let config = GeminiConfigBuilder::default()
            .api_key("test-key")
            .base_url(server.url())
            .build()
            .unwrap();
        GeminiTts::new(config)
    }

    #[test]
    fn decodes_the_audio_payload() {
        let mut server = mockito::Server::new();
        let pcm: &[u8] = &[0x01, 0x02, 0x03, 0x04];
        let mock = server
            .mock("POST", "/v1beta/models/test-model:generateContent?key=test-key")
            .match_body(mockito::Matcher::PartialJson(json!({
                "contents": [{"parts": [{"text": MARKUP}]}],
                "generationConfig": {
                    "responseModalities": ["AUDIO"],
                    "speechConfig": {
                        "voiceConfig": {"prebuiltVoiceConfig": {"voiceName": "Kore"}}
                    }
                }
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "candidates": [{
                        "content": {
                            "parts": [{
                                "inlineData": {
                                    "mimeType": "audio/L16;codec=pcm;rate=24000",
                                    "data": STANDARD.encode(pcm),
                                }
                            }]
                        }
                    }]
                })
                .to_string(),
            )
            .create();

        let bytes = client_for(&server).synthesize(&request()).unwrap();
        assert_eq!(bytes, pcm);
        mock.assert();
    }

    #[test]
    fn response_without_audio_is_a_typed_error() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/v1beta/models/test-model:generateContent?key=test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "candidates": [{
                        "content": {"parts": [{"text": "no audio here"}]}
                    }]
                })
                .to_string(),
            )
            .create();

        let err = client_for(&server).synthesize(&request()).unwrap_err();
        assert!(matches!(err, SynthesisError::MissingAudio));
        mock.assert();
    }

    #[test]
    fn server_error_maps_to_transport() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/v1beta/models/test-model:generateContent?key=test-key")
            .with_status(500)
            .with_body("{\"error\": {\"code\": 500}}")
            .create();

        let err = client_for(&server).synthesize(&request()).unwrap_err();
        assert!(matches!(err, SynthesisError::Transport(_)));
        mock.assert();
    }

    #[test]
    fn empty_markup_fails_before_any_network_io() {
        // Unroutable base URL: reaching the network would fail differently.
        let config = GeminiConfigBuilder::default()
            .api_key("test-key")
            .base_url("http://127.0.0.1:1")
            .build()
            .unwrap();
        let client = GeminiTts::new(config);

        let err = client
            .synthesize(&SpeechRequest {
                markup: "   ",
                voice: "Kore",
                model: "test-model",
            })
            .unwrap_err();
        assert!(matches!(err, SynthesisError::EmptyMarkup));
    }

    #[test]
    fn payload_extraction_skips_non_audio_parts() {
        let parsed: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "lead-in"},
                        {"inlineData": {"data": "QUJD"}}
                    ]
                }
            }]
        }))
        .unwrap();
        assert_eq!(extract_audio_payload(&parsed), Some("QUJD"));

        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(extract_audio_payload(&empty), None);
    }
}
