//! Error types for the Fable Forge story engine.
//!
//! This crate provides the foundation error types used throughout the Fable
//! Forge workspace.

mod audio;
mod gemini;
mod library;
mod script;

pub use audio::{AudioError, AudioErrorKind, AudioResult};
pub use gemini::{GeminiError, GeminiErrorKind, GeminiResult};
pub use library::{LibraryError, LibraryErrorKind, LibraryResult};
pub use script::{ScriptError, ScriptErrorKind, ScriptResult};

/// HTTP error wrapping reqwest errors with source location.
#[derive(Debug, Clone)]
pub struct HttpError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a new HttpError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "HTTP Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for HttpError {}

/// JSON serialization/deserialization error with source location.
#[derive(Debug, Clone)]
pub struct JsonError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a new JsonError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "JSON Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for JsonError {}

/// Configuration error with source location.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Configuration Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for ConfigError {}

/// Workspace-level error variants.
///
/// This is the foundation error enum. Each fable crate contributes the
/// variant for its own domain.
#[derive(Debug, derive_more::From)]
pub enum FableErrorKind {
    /// HTTP error
    Http(HttpError),
    /// JSON serialization/deserialization error
    Json(JsonError),
    /// Configuration error
    Config(ConfigError),
    /// Gemini API error
    Gemini(GeminiError),
    /// Story script parse/validation error
    Script(ScriptError),
    /// Narration audio error
    Audio(AudioError),
    /// History cache error
    Library(LibraryError),
}

impl std::fmt::Display for FableErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FableErrorKind::Http(e) => write!(f, "{}", e),
            FableErrorKind::Json(e) => write!(f, "{}", e),
            FableErrorKind::Config(e) => write!(f, "{}", e),
            FableErrorKind::Gemini(e) => write!(f, "{}", e),
            FableErrorKind::Script(e) => write!(f, "{}", e),
            FableErrorKind::Audio(e) => write!(f, "{}", e),
            FableErrorKind::Library(e) => write!(f, "{}", e),
        }
    }
}

/// Boxed workspace error.
///
/// Boxing keeps `Result<T, FableError>` a single word wide regardless of how
/// large the widest kind variant grows.
#[derive(Debug)]
pub struct FableError(Box<FableErrorKind>);

impl FableError {
    /// Create a new error from a kind.
    pub fn new(kind: FableErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FableErrorKind {
        &self.0
    }
}

impl std::fmt::Display for FableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fable Error: {}", self.0)
    }
}

impl std::error::Error for FableError {}

// Generic From implementation for any type that converts to FableErrorKind
impl<T> From<T> for FableError
where
    T: Into<FableErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Fable Forge operations.
pub type FableResult<T> = std::result::Result<T, FableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_captures_location() {
        let err = HttpError::new("connection refused");
        assert_eq!(err.file, file!());
        assert!(format!("{}", err).contains("connection refused"));
    }

    #[test]
    fn fable_error_wraps_kinds() {
        let err: FableError = ConfigError::new("missing output dir").into();
        assert!(matches!(err.kind(), FableErrorKind::Config(_)));
        assert!(format!("{}", err).starts_with("Fable Error:"));
    }
}
