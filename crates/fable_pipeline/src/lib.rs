//! The forge workflow.
//!
//! This crate holds the one piece of the system with real design decisions:
//! the generation-and-stitching pipeline and its partial-failure semantics.
//! Script composition is fatal when it fails; per-chapter illustration is
//! not; archiving is best-effort.

mod extract;
mod forge;
pub mod prompts;
mod script;

pub use extract::extract_json;
pub use forge::{ForgeReport, ForgeSettings, StoryForge};
pub use script::{ChapterScript, StoryScript, parse_script, validate_script};
