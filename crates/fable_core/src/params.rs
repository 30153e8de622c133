//! Generation parameters.

use crate::{Genre, Tone};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Default number of chapters in a forged story.
pub const DEFAULT_CHAPTER_COUNT: usize = 5;

/// Narrative depth bounds accepted by the forge.
pub const MIN_CHAPTER_COUNT: usize = 3;
/// Upper bound on narrative depth.
pub const MAX_CHAPTER_COUNT: usize = 8;

/// Clamp a requested chapter count into the supported range.
pub fn clamp_chapter_count(requested: usize) -> usize {
    requested.clamp(MIN_CHAPTER_COUNT, MAX_CHAPTER_COUNT)
}

/// Parameters for forging a new story.
///
/// # Examples
///
/// ```
/// use fable_core::{GenerationParams, Genre, Tone};
///
/// let params = GenerationParams::builder()
///     .prompt("A fortress carved from dark glass")
///     .genre(Genre::HighFantasy)
///     .tone(Tone::Epic)
///     .build()
///     .unwrap();
///
/// assert_eq!(*params.chapter_count(), 5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct GenerationParams {
    /// The user's seed prompt
    prompt: String,
    /// Story genre
    #[builder(default)]
    genre: Genre,
    /// Story tone
    #[builder(default)]
    tone: Tone,
    /// Narrative depth, clamped to the supported range on build
    #[builder(default = "DEFAULT_CHAPTER_COUNT")]
    #[builder(setter(custom))]
    chapter_count: usize,
}

impl GenerationParams {
    /// Creates a new builder for GenerationParams.
    pub fn builder() -> GenerationParamsBuilder {
        GenerationParamsBuilder::default()
    }
}

impl GenerationParamsBuilder {
    /// Set the narrative depth, clamping out-of-range values.
    pub fn chapter_count(&mut self, count: usize) -> &mut Self {
        self.chapter_count = Some(clamp_chapter_count(count));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chapter_count_defaults_to_five() {
        let params = GenerationParams::builder()
            .prompt("seed")
            .build()
            .unwrap();
        assert_eq!(*params.chapter_count(), DEFAULT_CHAPTER_COUNT);
    }

    #[test]
    fn chapter_count_clamps_to_bounds() {
        let low = GenerationParams::builder()
            .prompt("seed")
            .chapter_count(1)
            .build()
            .unwrap();
        assert_eq!(*low.chapter_count(), MIN_CHAPTER_COUNT);

        let high = GenerationParams::builder()
            .prompt("seed")
            .chapter_count(20)
            .build()
            .unwrap();
        assert_eq!(*high.chapter_count(), MAX_CHAPTER_COUNT);
    }

    #[test]
    fn missing_prompt_fails_build() {
        assert!(GenerationParams::builder().build().is_err());
    }
}
