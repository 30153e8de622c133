//! Fable Forge: multi-chapter illustrated stories from a single prompt.
//!
//! This crate is the workspace facade plus the CLI front end. The actual
//! machinery lives in the member crates:
//!
//! - [`fable_core`]: story and chapter types, option enums
//! - [`fable_interface`]: the [`ForgeDriver`] seam and progress events
//! - [`fable_gemini`]: the Gemini REST backend
//! - [`fable_pipeline`]: the forge workflow and its partial-failure rules
//! - [`fable_audio`]: narration decode, WAV export, playback
//! - [`fable_library`]: the best-effort story archive

pub mod cli;
mod config;
mod explore;
mod render;

pub use config::{ForgeConfig, SettingsKey};
pub use explore::{FeaturedSeed, daily_seed, featured_seeds};
pub use render::{export_story, print_event, print_library_entry, print_story};

// Re-export the workspace surface.
pub use fable_audio::{NarrationBuffer, decode_pcm16, wav_bytes, write_wav};
pub use fable_core::{
    Chapter, ChapterImage, ChapterNarration, ForgeStatus, GenerationParams, Genre, ImageStyle,
    NarrationVoice, Story, Tone,
};
pub use fable_error::{FableError, FableErrorKind, FableResult};
pub use fable_gemini::{GeminiClient, GeminiConfig};
pub use fable_interface::{
    AspectRatio, ForgeDriver, ForgeEvent, ImageRequest, ImageResponse, NarrationRequest,
    NarrationResponse, ScriptRequest, ScriptResponse,
};
pub use fable_library::{HistoryStore, LibraryConfig};
pub use fable_pipeline::{ForgeReport, ForgeSettings, StoryForge, extract_json, parse_script};
