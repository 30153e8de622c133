//! History cache errors.
//!
//! Callers generally treat save failures as warnings rather than run
//! failures, so these errors carry enough context to log usefully.

/// History cache error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LibraryErrorKind {
    /// Filesystem failure while reading or writing the archive
    Io(String),
    /// The archive could not be serialized or deserialized
    Serialize(String),
    /// No data directory could be resolved for the default archive path
    NoHome,
}

impl std::fmt::Display for LibraryErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LibraryErrorKind::Io(msg) => write!(f, "Archive I/O error: {}", msg),
            LibraryErrorKind::Serialize(msg) => {
                write!(f, "Archive serialization error: {}", msg)
            }
            LibraryErrorKind::NoHome => {
                write!(f, "Could not resolve a data directory for the archive")
            }
        }
    }
}

/// Library error with source location tracking.
#[derive(Debug, Clone)]
pub struct LibraryError {
    /// The kind of error that occurred
    pub kind: LibraryErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl LibraryError {
    /// Create a new LibraryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: LibraryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for LibraryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Library Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for LibraryError {}

/// Result type for history cache operations.
pub type LibraryResult<T> = std::result::Result<T, LibraryError>;
