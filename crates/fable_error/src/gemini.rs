//! Gemini-specific error types.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GeminiErrorKind {
    /// API key not found in environment
    MissingApiKey,
    /// API request failed
    ApiRequest(String),
    /// HTTP error with status code and message
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// The model returned no usable text
    EmptyResponse(String),
    /// The model returned no inline image data
    MissingImageData,
    /// The model returned no inline audio data
    MissingAudioData,
    /// Base64 decoding failed
    Base64Decode(String),
}

impl std::fmt::Display for GeminiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeminiErrorKind::MissingApiKey => {
                write!(f, "GEMINI_API_KEY environment variable not set")
            }
            GeminiErrorKind::ApiRequest(msg) => write!(f, "Gemini API request failed: {}", msg),
            GeminiErrorKind::HttpError {
                status_code,
                message,
            } => write!(f, "HTTP {} error: {}", status_code, message),
            GeminiErrorKind::EmptyResponse(model) => {
                write!(f, "The forge returned an empty script (model {})", model)
            }
            GeminiErrorKind::MissingImageData => write!(f, "Visual manifestation failed"),
            GeminiErrorKind::MissingAudioData => write!(f, "Voice synthesis failed"),
            GeminiErrorKind::Base64Decode(msg) => write!(f, "Base64 decode error: {}", msg),
        }
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use fable_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for GeminiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Gemini Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GeminiError {}

/// Result type for Gemini operations.
pub type GeminiResult<T> = std::result::Result<T, GeminiError>;
