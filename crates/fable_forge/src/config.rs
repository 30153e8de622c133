//! Persisted user defaults.

use fable_core::{DEFAULT_CHAPTER_COUNT, ImageStyle, NarrationVoice, clamp_chapter_count};
use fable_error::{ConfigError, FableResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// User defaults, persisted as TOML under the platform config directory.
///
/// CLI flags always override these values; the file only supplies what the
/// invocation leaves unspecified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    /// Default narration voice
    pub voice: NarrationVoice,
    /// Default illustration style
    pub image_style: ImageStyle,
    /// Default narrative depth
    pub chapter_count: usize,
    /// Default export directory; `None` exports beside the working directory
    pub output_dir: Option<PathBuf>,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            voice: NarrationVoice::default(),
            image_style: ImageStyle::default(),
            chapter_count: DEFAULT_CHAPTER_COUNT,
            output_dir: None,
        }
    }
}

impl ForgeConfig {
    /// Location of the config file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no config directory exists.
    pub fn default_path() -> FableResult<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| ConfigError::new("no config directory on this platform"))?;
        Ok(base.join("fable-forge").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it is absent.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unreadable or malformed file;
    /// silently repairing a file the user wrote by hand would hide typos.
    pub fn load_or_default() -> FableResult<Self> {
        let path = Self::default_path()?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let config = toml::from_str(&contents).map_err(|e| {
                    ConfigError::new(format!("{} is invalid: {}", path.display(), e))
                })?;
                debug!(path = %path.display(), "Loaded settings");
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::new(format!(
                "could not read {}: {}",
                path.display(),
                e
            ))
            .into()),
        }
    }

    /// Persist the config file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the file cannot be written.
    pub fn save(&self) -> FableResult<()> {
        let path = Self::default_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::new(format!("could not create {}: {}", parent.display(), e)))?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("could not serialize settings: {}", e)))?;
        std::fs::write(&path, contents)
            .map_err(|e| ConfigError::new(format!("could not write {}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "Saved settings");
        Ok(())
    }

    /// Apply one `settings set` assignment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unparseable value.
    pub fn set(&mut self, key: SettingsKey, value: &str) -> FableResult<()> {
        match key {
            SettingsKey::Voice => {
                self.voice = NarrationVoice::from_str(value)
                    .map_err(|_| ConfigError::new(format!("unknown voice '{}'", value)))?;
            }
            SettingsKey::ImageStyle => {
                self.image_style = ImageStyle::from_str(value)
                    .map_err(|_| ConfigError::new(format!("unknown image style '{}'", value)))?;
            }
            SettingsKey::Chapters => {
                let count: usize = value
                    .parse()
                    .map_err(|_| ConfigError::new(format!("'{}' is not a chapter count", value)))?;
                self.chapter_count = clamp_chapter_count(count);
            }
            SettingsKey::OutputDir => {
                self.output_dir = Some(PathBuf::from(value));
            }
        }
        Ok(())
    }
}

/// Keys accepted by `settings set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SettingsKey {
    /// Default narration voice
    Voice,
    /// Default illustration style
    ImageStyle,
    /// Default narrative depth
    Chapters,
    /// Default export directory
    OutputDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let config = ForgeConfig::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        let back: ForgeConfig = toml::from_str(&toml).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config: ForgeConfig = toml::from_str("voice = \"Puck\"").unwrap();
        assert_eq!(config.voice, NarrationVoice::Puck);
        assert_eq!(config.image_style, ImageStyle::Photorealistic);
        assert_eq!(config.chapter_count, 5);
    }

    #[test]
    fn set_parses_display_labels() {
        let mut config = ForgeConfig::default();
        config.set(SettingsKey::ImageStyle, "35mm Film").unwrap();
        assert_eq!(config.image_style, ImageStyle::Film35mm);

        config.set(SettingsKey::Chapters, "12").unwrap();
        // clamped to the supported range
        assert_eq!(config.chapter_count, 8);

        assert!(config.set(SettingsKey::Voice, "Nightingale").is_err());
    }
}
