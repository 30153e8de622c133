//! The generative backend seam.

use async_trait::async_trait;
use derive_builder::Builder;
use derive_getters::Getters;
use fable_core::{GenerationParams, Genre, ImageStyle, NarrationVoice, Tone};
use fable_error::FableResult;
use serde::{Deserialize, Serialize};

/// Request for a complete story script.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ScriptRequest {
    /// The user's seed prompt
    prompt: String,
    /// Story genre
    genre: Genre,
    /// Story tone
    tone: Tone,
    /// Number of chapters the response schema will demand
    chapter_count: usize,
    /// Sampling temperature override
    #[builder(default)]
    temperature: Option<f32>,
}

impl ScriptRequest {
    /// Creates a new builder for ScriptRequest.
    pub fn builder() -> ScriptRequestBuilder {
        ScriptRequestBuilder::default()
    }

    /// The generation parameters this request was built from.
    ///
    /// Drivers use this to hand the request to shared prompt assembly.
    pub fn to_params(&self) -> GenerationParams {
        GenerationParams::builder()
            .prompt(self.prompt.clone())
            .genre(self.genre)
            .tone(self.tone)
            .chapter_count(self.chapter_count)
            .build()
            .unwrap_or_else(|_| unreachable!())
    }
}

/// Raw script text from the backend, possibly markdown-fenced JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptResponse {
    /// The model's text output
    pub text: String,
}

/// Aspect ratio for chapter illustrations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum AspectRatio {
    /// 16:9 (default, the cinematic framing)
    #[default]
    #[strum(serialize = "16:9")]
    Widescreen,
    /// 1:1
    #[strum(serialize = "1:1")]
    Square,
    /// 9:16
    #[strum(serialize = "9:16")]
    Portrait,
}

/// Request for one chapter illustration.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ImageRequest {
    /// The chapter's image prompt, before style embellishment
    prompt: String,
    /// Illustration style
    #[builder(default)]
    style: ImageStyle,
    /// Frame shape
    #[builder(default)]
    aspect_ratio: AspectRatio,
}

impl ImageRequest {
    /// Creates a new builder for ImageRequest.
    pub fn builder() -> ImageRequestBuilder {
        ImageRequestBuilder::default()
    }
}

/// A painted illustration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResponse {
    /// Image MIME type
    pub mime: String,
    /// Decoded image bytes
    pub data: Vec<u8>,
}

/// Request for spoken narration of a passage.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct NarrationRequest {
    /// The text to read
    text: String,
    /// Which prebuilt voice reads it
    #[builder(default)]
    voice: NarrationVoice,
}

impl NarrationRequest {
    /// Creates a new builder for NarrationRequest.
    pub fn builder() -> NarrationRequestBuilder {
        NarrationRequestBuilder::default()
    }
}

/// Synthesized narration: PCM s16le, 24 kHz mono from the real endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrationResponse {
    /// PCM s16le bytes
    pub data: Vec<u8>,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Interleaved channel count
    pub channels: u16,
}

/// The three generative capabilities the pipeline drives.
///
/// One trait rather than three: every known backend exposes text, image,
/// and speech through the same client, and the pipeline always needs all
/// three together.
#[async_trait]
pub trait ForgeDriver: Send + Sync {
    /// Compose the story script for the given parameters.
    async fn compose_script(&self, request: &ScriptRequest) -> FableResult<ScriptResponse>;

    /// Paint one chapter illustration.
    async fn paint_illustration(&self, request: &ImageRequest) -> FableResult<ImageResponse>;

    /// Synthesize narration for a passage.
    async fn narrate(&self, request: &NarrationRequest) -> FableResult<NarrationResponse>;

    /// Name of the backing provider, for logging.
    fn provider_name(&self) -> &str;

    /// Model used for script composition.
    fn script_model(&self) -> &str;

    /// Model used for illustration.
    fn image_model(&self) -> &str;

    /// Model used for narration.
    fn tts_model(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn aspect_ratio_serializes_to_wire_label() {
        assert_eq!(AspectRatio::Widescreen.to_string(), "16:9");
        assert_eq!(AspectRatio::from_str("9:16").unwrap(), AspectRatio::Portrait);
    }

    #[test]
    fn script_request_requires_prompt() {
        let result = ScriptRequest::builder()
            .genre(Genre::Fable)
            .tone(Tone::Whimsical)
            .chapter_count(5usize)
            .build();
        assert!(result.is_err());
    }
}
