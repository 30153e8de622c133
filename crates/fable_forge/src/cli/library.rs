//! Archive command handlers.

use super::LibraryCommands;
use crate::render;
use fable_error::FableResult;
use fable_library::{HistoryStore, LibraryConfig};

/// Handles the library subcommands.
pub fn handle_library_command(command: LibraryCommands) -> FableResult<()> {
    let config = LibraryConfig::from_default_path()?;
    let mut store = HistoryStore::load(config);

    match command {
        LibraryCommands::List => {
            if store.stories().is_empty() {
                println!("The library is empty. Forge something.");
                return Ok(());
            }
            for story in store.stories() {
                render::print_library_entry(story);
            }
        }
        LibraryCommands::Show { id_prefix } => match store.find(&id_prefix) {
            Some(story) => render::print_story(story),
            None => println!("No archived story matches '{}'.", id_prefix),
        },
        LibraryCommands::Clear => {
            let count = store.stories().len();
            store.clear()?;
            println!("Cleared {} archived stories.", count);
        }
    }

    Ok(())
}
