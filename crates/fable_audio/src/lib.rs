//! Narration audio handling for Fable Forge.
//!
//! The speech endpoint returns raw PCM s16le. This crate decodes that into
//! a normalized sample buffer, writes it out as a playable WAV file, and
//! (behind the `playback` feature) plays it on the default output device.

mod buffer;
#[cfg(feature = "playback")]
mod playback;
mod wav;

pub use buffer::{NarrationBuffer, decode_pcm16};
#[cfg(feature = "playback")]
pub use playback::play;
pub use wav::{wav_bytes, write_wav};
