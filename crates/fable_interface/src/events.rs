//! Progress events emitted by the forge pipeline.

use fable_core::{ChapterImage, Story};

/// One step of forge progress.
///
/// A run emits exactly one `ScriptReady`, then per chapter exactly one of
/// `ChapterIllustrated`, `IllustrationFailed`, or `IllustrationSkipped` in
/// chapter order, then `Archived`, then `Completed`. The story carried by
/// `ScriptReady` is complete and usable before any illustration exists,
/// and is never retracted by a later failure.
#[derive(Debug, Clone)]
pub enum ForgeEvent {
    /// The script phase finished; text is ready to display.
    ScriptReady(Story),
    /// A chapter illustration arrived.
    ChapterIllustrated {
        /// Chapter index within the story
        index: usize,
        /// The painted illustration
        image: ChapterImage,
    },
    /// A chapter illustration failed; the run continues.
    IllustrationFailed {
        /// Chapter index within the story
        index: usize,
        /// Rendered error, for display
        error: String,
    },
    /// The illustration phase was turned off for this run.
    IllustrationSkipped {
        /// Chapter index within the story
        index: usize,
    },
    /// The history archive write finished (successfully or not).
    Archived {
        /// Whether the archive write succeeded
        persisted: bool,
    },
    /// The run is over.
    Completed,
}
