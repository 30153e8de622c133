//! CLI argument structure.

use crate::config::SettingsKey;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Forge multi-chapter illustrated stories from a single prompt.
#[derive(Parser, Debug)]
#[command(name = "fable-forge")]
#[command(about = "Forge multi-chapter illustrated stories with optional narration")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Forge a new story from a prompt
    Forge {
        /// The seed prompt
        prompt: String,

        /// Genre label, e.g. "High Fantasy" (default from settings)
        #[arg(long)]
        genre: Option<String>,

        /// Tone label, e.g. "Epic"
        #[arg(long)]
        tone: Option<String>,

        /// Narrative depth (clamped to 3..=8)
        #[arg(long)]
        chapters: Option<usize>,

        /// Illustration style label, e.g. "Cinematic Oil"
        #[arg(long)]
        style: Option<String>,

        /// Skip the illustration phase
        #[arg(long)]
        no_images: bool,

        /// Synthesize narration for every chapter after the run
        #[arg(long)]
        narrate: bool,

        /// Narration voice, e.g. "Kore"
        #[arg(long)]
        voice: Option<String>,

        /// Export directory (default from settings, else ./stories)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Browse the story archive
    Library {
        /// What to do with the archive
        #[command(subcommand)]
        command: LibraryCommands,
    },

    /// Featured story seeds
    Explore {
        /// Forge the numbered seed (1-based; 0 for the daily seed)
        #[arg(long, value_name = "N")]
        forge: Option<usize>,
    },

    /// List narration voices
    Voices,

    /// List illustration styles
    Styles,

    /// Persisted defaults
    Settings {
        /// What to do with the settings
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

/// Archive subcommands.
#[derive(Subcommand, Debug)]
pub enum LibraryCommands {
    /// List archived stories, newest first
    List,
    /// Show one archived story by id prefix
    Show {
        /// The 8-character id prefix from `library list`
        id_prefix: String,
    },
    /// Empty the archive
    Clear,
}

/// Settings subcommands.
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Print the current settings
    Show,
    /// Set one default
    Set {
        /// Which setting to change
        #[arg(value_enum)]
        key: SettingsKey,
        /// The new value
        value: String,
    },
}
