//! User-facing option enums.
//!
//! Display strings match the labels the forge presents to users, so they
//! round-trip through `FromStr` for CLI parsing.

use serde::{Deserialize, Serialize};

/// Story genre.
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
    strum::EnumIter,
)]
pub enum Genre {
    /// "High Fantasy"
    #[default]
    #[strum(serialize = "High Fantasy")]
    HighFantasy,
    /// "Cyberpunk"
    Cyberpunk,
    /// "Cosmic Horror"
    #[strum(serialize = "Cosmic Horror")]
    CosmicHorror,
    /// "Greek Myth"
    #[strum(serialize = "Greek Myth")]
    GreekMyth,
    /// "Steampunk"
    Steampunk,
    /// "Fable"
    Fable,
}

/// Story tone.
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
    strum::EnumIter,
)]
pub enum Tone {
    /// Sweeping and grand
    #[default]
    Epic,
    /// Grim and foreboding
    Dark,
    /// Light and playful
    Whimsical,
    /// Sorrowful
    Tragic,
    /// Uplifting
    Hopeful,
    /// Thoughtful and idea-driven
    Cerebral,
}

/// Prebuilt narration voices offered by the speech endpoint.
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
    strum::EnumIter,
)]
pub enum NarrationVoice {
    /// Warm, even narrator (default)
    #[default]
    Kore,
    /// Bright and mischievous
    Puck,
    /// Low and solemn
    Charon,
    /// Gravelly
    Fenrir,
    /// Airy
    Zephyr,
}

impl NarrationVoice {
    /// The voice name as the speech endpoint expects it.
    pub fn voice_name(&self) -> &'static str {
        match self {
            NarrationVoice::Kore => "Kore",
            NarrationVoice::Puck => "Puck",
            NarrationVoice::Charon => "Charon",
            NarrationVoice::Fenrir => "Fenrir",
            NarrationVoice::Zephyr => "Zephyr",
        }
    }
}

/// Illustration style applied to every chapter image prompt.
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
    strum::EnumIter,
)]
pub enum ImageStyle {
    /// "Photorealistic"
    #[default]
    Photorealistic,
    /// "Cinematic Oil"
    #[strum(serialize = "Cinematic Oil")]
    CinematicOil,
    /// "35mm Film"
    #[strum(serialize = "35mm Film")]
    Film35mm,
    /// "Surrealist"
    Surrealist,
}

impl ImageStyle {
    /// The style clause appended to an illustration prompt.
    pub fn prompt_clause(&self) -> &'static str {
        match self {
            ImageStyle::Photorealistic => {
                "realistic skin and environmental textures, natural lighting"
            }
            ImageStyle::CinematicOil => {
                "rendered as a dramatic oil painting with heavy impasto brushwork"
            }
            ImageStyle::Film35mm => "shot on 35mm film with visible grain and anamorphic flare",
            ImageStyle::Surrealist => {
                "composed as a surrealist dreamscape with impossible geometry"
            }
        }
    }
}
