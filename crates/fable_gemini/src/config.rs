//! Client configuration.

use derive_builder::Builder;
use derive_getters::Getters;
use fable_error::{GeminiError, GeminiErrorKind, GeminiResult};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Default model for script composition.
pub const DEFAULT_SCRIPT_MODEL: &str = "gemini-3-flash-preview";
/// Default model for chapter illustration.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
/// Default model for narration synthesis.
pub const DEFAULT_TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";

/// Configuration for [`crate::GeminiClient`].
#[derive(Debug, Clone, Builder, Getters)]
#[builder(setter(into))]
pub struct GeminiConfig {
    /// API key sent in the `x-goog-api-key` header
    api_key: String,
    /// API base URL, without trailing slash
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Script composition model
    #[builder(default = "DEFAULT_SCRIPT_MODEL.to_string()")]
    script_model: String,
    /// Illustration model
    #[builder(default = "DEFAULT_IMAGE_MODEL.to_string()")]
    image_model: String,
    /// Narration model
    #[builder(default = "DEFAULT_TTS_MODEL.to_string()")]
    tts_model: String,
}

impl GeminiConfig {
    /// Creates a new builder for GeminiConfig.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }

    /// Build a configuration from the environment.
    ///
    /// Reads `GEMINI_API_KEY` (required) plus optional `GEMINI_BASE_URL`,
    /// `GEMINI_SCRIPT_MODEL`, `GEMINI_IMAGE_MODEL`, and `GEMINI_TTS_MODEL`
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::MissingApiKey`] when the key is unset.
    pub fn from_env() -> GeminiResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        let mut builder = Self::builder();
        builder.api_key(api_key);
        if let Ok(base_url) = std::env::var("GEMINI_BASE_URL") {
            builder.base_url(base_url);
        }
        if let Ok(model) = std::env::var("GEMINI_SCRIPT_MODEL") {
            builder.script_model(model);
        }
        if let Ok(model) = std::env::var("GEMINI_IMAGE_MODEL") {
            builder.image_model(model);
        }
        if let Ok(model) = std::env::var("GEMINI_TTS_MODEL") {
            builder.tts_model(model);
        }

        // api_key is set above, so build cannot fail
        Ok(builder.build().unwrap_or_else(|_| unreachable!()))
    }
}
