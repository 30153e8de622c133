//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! fable-forge binary.

mod commands;
mod explore;
mod forge;
mod library;
mod settings;

pub use commands::{Cli, Commands, LibraryCommands, SettingsCommands};
pub use explore::handle_explore_command;
pub use forge::{ForgeInvocation, build_invocation, handle_forge_command};
pub use library::handle_library_command;
pub use settings::{handle_settings_command, list_styles, list_voices};
