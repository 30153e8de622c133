//! Story script parse and validation errors.

/// Conditions under which a story script fails to parse or validate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScriptErrorKind {
    /// The model output was not valid JSON, even after fence stripping
    JsonSyntax(String),
    /// The script contained no chapters at all
    NoChapters,
    /// The model returned a different chapter count than requested
    ChapterCount {
        /// Chapters requested via the response schema
        expected: usize,
        /// Chapters actually present in the script
        actual: usize,
    },
    /// A chapter arrived with blank narrative content
    EmptyChapterContent(usize),
}

impl std::fmt::Display for ScriptErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptErrorKind::JsonSyntax(msg) => write!(f, "Script is not valid JSON: {}", msg),
            ScriptErrorKind::NoChapters => write!(f, "Script contains no chapters"),
            ScriptErrorKind::ChapterCount { expected, actual } => write!(
                f,
                "Script has {} chapters where {} were requested",
                actual, expected
            ),
            ScriptErrorKind::EmptyChapterContent(index) => {
                write!(f, "Chapter {} has empty content", index)
            }
        }
    }
}

/// Script error with source location tracking.
#[derive(Debug, Clone)]
pub struct ScriptError {
    /// The kind of error that occurred
    pub kind: ScriptErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ScriptError {
    /// Create a new ScriptError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ScriptErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Script Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ScriptError {}

/// Result type for script parsing and validation.
pub type ScriptResult<T> = std::result::Result<T, ScriptError>;
