//! Core data types for the Fable Forge story engine.
//!
//! This crate provides the domain types shared across the workspace: the
//! story and chapter records, the generation parameters, and the user-facing
//! option enums.

mod options;
mod params;
mod status;
mod story;

pub use options::{Genre, ImageStyle, NarrationVoice, Tone};
pub use params::{
    DEFAULT_CHAPTER_COUNT, GenerationParams, GenerationParamsBuilder, MAX_CHAPTER_COUNT,
    MIN_CHAPTER_COUNT, clamp_chapter_count,
};
pub use status::ForgeStatus;
pub use story::{Chapter, ChapterImage, ChapterNarration, Story};
