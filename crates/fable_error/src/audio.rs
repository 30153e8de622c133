//! Narration audio decode and playback errors.

/// Audio decode and playback error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AudioErrorKind {
    /// PCM s16le payload had an odd byte count
    OddByteLength(usize),
    /// The audio payload was empty
    EmptyPayload,
    /// The channel count is zero or otherwise unusable
    UnsupportedChannelCount(u16),
    /// The sample rate is zero
    ZeroSampleRate,
    /// Filesystem failure while writing audio
    Io(String),
    /// No audio output device is available
    PlaybackUnavailable,
}

impl std::fmt::Display for AudioErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AudioErrorKind::OddByteLength(len) => {
                write!(f, "PCM payload has odd byte length {}", len)
            }
            AudioErrorKind::EmptyPayload => write!(f, "Audio payload is empty"),
            AudioErrorKind::UnsupportedChannelCount(channels) => {
                write!(f, "Unsupported channel count {}", channels)
            }
            AudioErrorKind::ZeroSampleRate => write!(f, "Sample rate is zero"),
            AudioErrorKind::Io(msg) => write!(f, "Audio I/O error: {}", msg),
            AudioErrorKind::PlaybackUnavailable => {
                write!(f, "No audio output device available")
            }
        }
    }
}

/// Audio error with source location tracking.
#[derive(Debug, Clone)]
pub struct AudioError {
    /// The kind of error that occurred
    pub kind: AudioErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl AudioError {
    /// Create a new AudioError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AudioErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for AudioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Audio Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for AudioError {}

/// Result type for audio operations.
pub type AudioResult<T> = std::result::Result<T, AudioError>;
