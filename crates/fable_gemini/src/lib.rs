//! Gemini REST integration for Fable Forge.
//!
//! Talks to the `generateContent` endpoint directly over reqwest so the
//! text, image, and speech models share one client and one error surface.

mod client;
mod config;
mod dto;
mod schema;

pub use client::GeminiClient;
pub use config::{GeminiConfig, GeminiConfigBuilder};
pub use dto::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    ImageConfig, InlineData, Part, PrebuiltVoiceConfig, SpeechConfig, VoiceConfig,
};
pub use schema::script_response_schema;
