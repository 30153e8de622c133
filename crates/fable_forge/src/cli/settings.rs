//! Settings, voices, and styles command handlers.

use super::SettingsCommands;
use crate::config::ForgeConfig;
use fable_core::{ImageStyle, NarrationVoice};
use fable_error::FableResult;
use strum::IntoEnumIterator;

/// Handles the settings subcommands.
pub fn handle_settings_command(command: SettingsCommands) -> FableResult<()> {
    match command {
        SettingsCommands::Show => {
            let config = ForgeConfig::load_or_default()?;
            println!("voice:        {}", config.voice);
            println!("image-style:  {}", config.image_style);
            println!("chapters:     {}", config.chapter_count);
            match &config.output_dir {
                Some(dir) => println!("output-dir:   {}", dir.display()),
                None => println!("output-dir:   (unset, ./stories)"),
            }
        }
        SettingsCommands::Set { key, value } => {
            let mut config = ForgeConfig::load_or_default()?;
            config.set(key, &value)?;
            config.save()?;
            println!("Saved.");
        }
    }
    Ok(())
}

/// List the narration voices.
pub fn list_voices() {
    let default = NarrationVoice::default();
    for voice in NarrationVoice::iter() {
        if voice == default {
            println!("{} (default)", voice);
        } else {
            println!("{}", voice);
        }
    }
}

/// List the illustration styles.
pub fn list_styles() {
    let default = ImageStyle::default();
    for style in ImageStyle::iter() {
        if style == default {
            println!("{} (default)", style);
        } else {
            println!("{}", style);
        }
    }
}
