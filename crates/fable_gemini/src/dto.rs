//! Wire types for the `generateContent` endpoint.
//!
//! Field names follow the API's camelCase convention via serde renames.

use serde::{Deserialize, Serialize};

/// Inline binary payload, base64-encoded on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the payload
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Base64-encoded bytes
    pub data: String,
}

/// One part of a content block: text or inline data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Inline binary content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    /// A text-only part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }
}

/// A content block: an ordered list of parts with an optional role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Parts in order
    pub parts: Vec<Part>,
    /// Originating role ("user" or "model")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Content {
    /// A user content block holding a single text part.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part::text(text)],
            role: Some("user".to_string()),
        }
    }
}

/// Prebuilt voice selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrebuiltVoiceConfig {
    /// Voice name, e.g. "Kore"
    pub voice_name: String,
}

/// Voice configuration wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    /// The prebuilt voice to use
    pub prebuilt_voice_config: PrebuiltVoiceConfig,
}

/// Speech synthesis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechConfig {
    /// Voice configuration
    pub voice_config: VoiceConfig,
}

impl SpeechConfig {
    /// Speech config for a named prebuilt voice.
    pub fn prebuilt(voice_name: impl Into<String>) -> Self {
        Self {
            voice_config: VoiceConfig {
                prebuilt_voice_config: PrebuiltVoiceConfig {
                    voice_name: voice_name.into(),
                },
            },
        }
    }
}

/// Image generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    /// Aspect ratio label, e.g. "16:9"
    pub aspect_ratio: String,
}

/// Generation configuration: only the knobs the forge uses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Response MIME type ("application/json" for the script call)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// JSON response schema for structured output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
    /// Output modalities (["AUDIO"] for narration)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,
    /// Speech synthesis settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speech_config: Option<SpeechConfig>,
    /// Image generation settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_config: Option<ImageConfig>,
    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Input content blocks
    pub contents: Vec<Content>,
    /// Generation settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// One candidate in a response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    pub content: Option<Content>,
}

/// Response body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidates, best first
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of every text part in the first candidate.
    pub fn first_candidate_text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }

    /// First inline data payload in the first candidate.
    ///
    /// Image responses interleave text and image parts, so every part is
    /// scanned rather than just the first.
    pub fn first_inline_data(&self) -> Option<&InlineData> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.iter().find_map(|p| p.inline_data.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_camel_case() {
        let request = GenerateContentRequest {
            contents: vec![Content::user_text("hello")],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_modalities: Some(vec!["AUDIO".to_string()]),
                speech_config: Some(SpeechConfig::prebuilt("Kore")),
                image_config: Some(ImageConfig {
                    aspect_ratio: "16:9".to_string(),
                }),
                ..Default::default()
            }),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(value["generationConfig"]["responseModalities"][0], "AUDIO");
        assert_eq!(
            value["generationConfig"]["speechConfig"]["voiceConfig"]["prebuiltVoiceConfig"]
                ["voiceName"],
            "Kore"
        );
        assert_eq!(value["generationConfig"]["imageConfig"]["aspectRatio"], "16:9");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn first_candidate_text_concatenates_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "parts": [{"text": "fore"}, {"text": "ground"}],
                    "role": "model"
                }
            }]
        }))
        .unwrap();
        assert_eq!(response.first_candidate_text(), "foreground");
    }

    #[test]
    fn first_inline_data_skips_leading_text_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "Here is your image:"},
                        {"inlineData": {"mimeType": "image/png", "data": "cG5n"}}
                    ]
                }
            }]
        }))
        .unwrap();
        let inline = response.first_inline_data().unwrap();
        assert_eq!(inline.mime_type.as_deref(), Some("image/png"));
        assert_eq!(inline.data, "cG5n");
    }

    #[test]
    fn empty_response_yields_empty_text() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": []})).unwrap();
        assert_eq!(response.first_candidate_text(), "");
        assert!(response.first_inline_data().is_none());
    }
}
