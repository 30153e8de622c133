//! Best-effort local story history ("the archive").
//!
//! Stories are cached text-only, newest first, capped at a handful of
//! entries. Every failure mode degrades gracefully: a corrupt archive
//! resets to empty with a warning, and a failed save keeps the in-memory
//! state so the session continues unharmed.

use derive_getters::Getters;
use derive_setters::Setters;
use fable_core::Story;
use fable_error::{LibraryError, LibraryErrorKind, LibraryResult};
use std::path::PathBuf;
use tracing::{debug, warn};
use uuid::Uuid;

/// Default cap on archived stories.
pub const DEFAULT_MAX_ENTRIES: usize = 5;

/// Configuration for the history archive.
#[derive(Debug, Clone, Getters, Setters)]
#[setters(prefix = "with_")]
pub struct LibraryConfig {
    /// Path of the archive JSON file
    path: PathBuf,
    /// Maximum number of stories retained
    max_entries: usize,
}

impl LibraryConfig {
    /// The default archive location under the platform data directory.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryErrorKind::NoHome`] when no data directory can be
    /// resolved.
    pub fn default_path() -> LibraryResult<PathBuf> {
        let base = dirs::data_dir().ok_or_else(|| LibraryError::new(LibraryErrorKind::NoHome))?;
        Ok(base.join("fable-forge").join("history.json"))
    }

    /// Configuration pointing at the default archive location.
    pub fn from_default_path() -> LibraryResult<Self> {
        Ok(Self {
            path: Self::default_path()?,
            max_entries: DEFAULT_MAX_ENTRIES,
        })
    }

    /// Configuration for an explicit archive file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

/// The story archive: an in-memory list backed by one JSON file.
#[derive(Debug)]
pub struct HistoryStore {
    config: LibraryConfig,
    stories: Vec<Story>,
}

impl HistoryStore {
    /// Load the archive, tolerating absence and corruption.
    ///
    /// A missing file yields an empty archive. An unreadable or corrupt
    /// file logs a warning and also yields an empty archive; the next save
    /// overwrites it.
    pub fn load(config: LibraryConfig) -> Self {
        let stories = match std::fs::read_to_string(config.path()) {
            Ok(contents) => match serde_json::from_str::<Vec<Story>>(&contents) {
                Ok(stories) => stories,
                Err(e) => {
                    warn!(error = %e, path = %config.path().display(), "History parse failed; starting empty");
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!(error = %e, path = %config.path().display(), "History unreadable; starting empty");
                Vec::new()
            }
        };

        debug!(count = stories.len(), "Loaded story archive");
        Self { config, stories }
    }

    /// Archive a story.
    ///
    /// The story is stored text-only (media stripped), replacing any
    /// earlier entry with the same id, newest first, truncated to the
    /// configured cap. The write is atomic-ish: serialize to a temp file in
    /// the same directory, then rename over the archive.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryErrorKind::Io`] or [`LibraryErrorKind::Serialize`]
    /// on persistence failure. The in-memory state is already updated when
    /// that happens, so callers can log and carry on.
    pub fn save(&mut self, story: &Story) -> LibraryResult<()> {
        let stripped = story.strip_media();
        self.stories.retain(|s| s.id != stripped.id);
        self.stories.insert(0, stripped);
        self.stories.truncate(*self.config.max_entries());
        self.persist()
    }

    fn persist(&self) -> LibraryResult<()> {
        let json = serde_json::to_string_pretty(&self.stories)
            .map_err(|e| LibraryError::new(LibraryErrorKind::Serialize(e.to_string())))?;

        let path = self.config.path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| LibraryError::new(LibraryErrorKind::Io(e.to_string())))?;
        }

        let temp = path.with_extension("json.tmp");
        std::fs::write(&temp, json)
            .map_err(|e| LibraryError::new(LibraryErrorKind::Io(e.to_string())))?;
        std::fs::rename(&temp, path)
            .map_err(|e| LibraryError::new(LibraryErrorKind::Io(e.to_string())))?;

        debug!(count = self.stories.len(), path = %path.display(), "Archived stories");
        Ok(())
    }

    /// Archived stories, newest first.
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// Find a story by id prefix (the display surface shows 8-char ids).
    pub fn find(&self, id_prefix: &str) -> Option<&Story> {
        let needle = id_prefix.to_lowercase();
        self.stories
            .iter()
            .find(|s| s.id.as_hyphenated().to_string().starts_with(&needle))
    }

    /// Drop every archived story and persist the empty archive.
    ///
    /// # Errors
    ///
    /// Returns the persistence error, with the in-memory state already
    /// cleared.
    pub fn clear(&mut self) -> LibraryResult<()> {
        self.stories.clear();
        self.persist()
    }
}

/// The 8-character id prefix the display surface shows for a story.
pub fn id_prefix(id: &Uuid) -> String {
    id.as_hyphenated().to_string()[..8].to_string()
}
