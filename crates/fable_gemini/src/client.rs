//! The Gemini `generateContent` client.

use crate::config::GeminiConfig;
use crate::dto::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig,
    SpeechConfig,
};
use crate::schema::script_response_schema;
use async_trait::async_trait;
use base64::Engine;
use fable_error::{FableResult, GeminiError, GeminiErrorKind, JsonError};
use fable_interface::{
    ForgeDriver, ImageRequest, ImageResponse, NarrationRequest, NarrationResponse, ScriptRequest,
    ScriptResponse,
};
use fable_pipeline::prompts;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Sample rate of the speech endpoint's PCM output, in Hz.
const TTS_SAMPLE_RATE: u32 = 24_000;
/// Channel count of the speech endpoint's PCM output.
const TTS_CHANNELS: u16 = 1;

/// Client for the Gemini REST API, driving text, image, and speech models
/// through one `generateContent` surface.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Creates a new client over the given configuration.
    pub fn new(config: GeminiConfig) -> Self {
        debug!(
            base_url = %config.base_url(),
            script_model = %config.script_model(),
            image_model = %config.image_model(),
            tts_model = %config.tts_model(),
            "Created Gemini client"
        );
        Self {
            client: Client::new(),
            config,
        }
    }

    /// POST one `generateContent` request against the named model.
    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> FableResult<GenerateContentResponse> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url(),
            model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.config.api_key())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(model, error = %e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(model, status = status.as_u16(), %message, "API error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(model, error = %e, "Failed to parse response");
            JsonError::new(e.to_string())
        })?;

        debug!(model, candidates = parsed.candidates.len(), "Received response");
        Ok(parsed)
    }

    fn decode_inline(data: &str) -> FableResult<Vec<u8>> {
        base64::engine::general_purpose::STANDARD
            .decode(data)
            .map_err(|e| GeminiError::new(GeminiErrorKind::Base64Decode(e.to_string())).into())
    }
}

#[async_trait]
impl ForgeDriver for GeminiClient {
    /// Compose the story script: JSON mime type plus a response schema
    /// pinned to the requested chapter count.
    #[instrument(skip(self, request), fields(model = %self.config.script_model()))]
    async fn compose_script(&self, request: &ScriptRequest) -> FableResult<ScriptResponse> {
        let params = request.to_params();
        let body = GenerateContentRequest {
            contents: vec![Content::user_text(prompts::script_prompt(&params))],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(script_response_schema(*request.chapter_count())),
                temperature: *request.temperature(),
                ..Default::default()
            }),
        };

        let response = self.generate(self.config.script_model(), &body).await?;
        let text = response.first_candidate_text();
        if text.is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::EmptyResponse(
                self.config.script_model().clone(),
            ))
            .into());
        }

        Ok(ScriptResponse { text })
    }

    /// Paint one chapter illustration.
    ///
    /// Image candidates interleave text and image parts, so every part is
    /// scanned for the first inline payload.
    #[instrument(skip(self, request), fields(model = %self.config.image_model()))]
    async fn paint_illustration(&self, request: &ImageRequest) -> FableResult<ImageResponse> {
        let body = GenerateContentRequest {
            contents: vec![Content::user_text(request.prompt().clone())],
            generation_config: Some(GenerationConfig {
                image_config: Some(ImageConfig {
                    aspect_ratio: request.aspect_ratio().to_string(),
                }),
                ..Default::default()
            }),
        };

        let response = self.generate(self.config.image_model(), &body).await?;
        let inline = response
            .first_inline_data()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingImageData))?;

        let data = Self::decode_inline(&inline.data)?;
        let mime = inline
            .mime_type
            .clone()
            .unwrap_or_else(|| "image/png".to_string());

        Ok(ImageResponse { mime, data })
    }

    /// Synthesize narration: AUDIO modality with the requested prebuilt
    /// voice; the payload comes back as base64 PCM s16le, 24 kHz mono.
    #[instrument(skip(self, request), fields(model = %self.config.tts_model(), voice = %request.voice()))]
    async fn narrate(&self, request: &NarrationRequest) -> FableResult<NarrationResponse> {
        let body = GenerateContentRequest {
            contents: vec![Content::user_text(prompts::narration_prompt(request.text()))],
            generation_config: Some(GenerationConfig {
                response_modalities: Some(vec!["AUDIO".to_string()]),
                speech_config: Some(SpeechConfig::prebuilt(request.voice().voice_name())),
                ..Default::default()
            }),
        };

        let response = self.generate(self.config.tts_model(), &body).await?;
        let inline = response
            .first_inline_data()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingAudioData))?;

        let data = Self::decode_inline(&inline.data)?;
        Ok(NarrationResponse {
            data,
            sample_rate: TTS_SAMPLE_RATE,
            channels: TTS_CHANNELS,
        })
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }

    fn script_model(&self) -> &str {
        self.config.script_model()
    }

    fn image_model(&self) -> &str {
        self.config.image_model()
    }

    fn tts_model(&self) -> &str {
        self.config.tts_model()
    }
}
