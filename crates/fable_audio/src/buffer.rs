//! PCM decoding into a playable sample buffer.

use fable_error::{AudioError, AudioErrorKind, AudioResult};
use std::time::Duration;

/// A decoded narration clip: interleaved samples normalized to `-1.0..1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrationBuffer {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Interleaved channel count
    pub channels: u16,
    /// Interleaved f32 samples
    pub samples: Vec<f32>,
}

impl NarrationBuffer {
    /// Number of frames (samples per channel).
    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    /// Clip duration.
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.frame_count() as f64 / self.sample_rate as f64)
    }

    /// De-interleaved view of one channel.
    pub fn channel(&self, index: u16) -> Vec<f32> {
        let stride = self.channels as usize;
        self.samples
            .iter()
            .skip(index as usize)
            .step_by(stride)
            .copied()
            .collect()
    }
}

/// Decode raw PCM s16le bytes into a [`NarrationBuffer`].
///
/// Bytes are interpreted as little-endian i16 frames and normalized by
/// 32768.0, matching how the speech endpoint's payload is meant to be read.
///
/// # Errors
///
/// Returns [`AudioErrorKind::EmptyPayload`] for an empty slice,
/// [`AudioErrorKind::OddByteLength`] when the byte count is not a multiple
/// of two, [`AudioErrorKind::UnsupportedChannelCount`] for zero channels,
/// and [`AudioErrorKind::ZeroSampleRate`] for a zero rate. Rejecting the
/// zero rate here keeps [`NarrationBuffer::duration`] total.
pub fn decode_pcm16(bytes: &[u8], sample_rate: u32, channels: u16) -> AudioResult<NarrationBuffer> {
    if bytes.is_empty() {
        return Err(AudioError::new(AudioErrorKind::EmptyPayload));
    }
    if bytes.len() % 2 != 0 {
        return Err(AudioError::new(AudioErrorKind::OddByteLength(bytes.len())));
    }
    if channels == 0 {
        return Err(AudioError::new(AudioErrorKind::UnsupportedChannelCount(0)));
    }
    if sample_rate == 0 {
        return Err(AudioError::new(AudioErrorKind::ZeroSampleRate));
    }

    let samples = bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / 32768.0)
        .collect();

    Ok(NarrationBuffer {
        sample_rate,
        channels,
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fable_error::AudioErrorKind;

    #[test]
    fn decodes_little_endian_and_normalizes() {
        // i16::MIN, 0, i16::MAX
        let bytes = [0x00, 0x80, 0x00, 0x00, 0xFF, 0x7F];
        let buffer = decode_pcm16(&bytes, 24000, 1).unwrap();
        assert_eq!(buffer.samples.len(), 3);
        assert_eq!(buffer.samples[0], -1.0);
        assert_eq!(buffer.samples[1], 0.0);
        assert!((buffer.samples[2] - 32767.0 / 32768.0).abs() < f32::EPSILON);
    }

    #[test]
    fn rejects_odd_byte_count() {
        let err = decode_pcm16(&[0x00, 0x01, 0x02], 24000, 1).unwrap_err();
        assert_eq!(err.kind, AudioErrorKind::OddByteLength(3));
    }

    #[test]
    fn rejects_empty_payload() {
        let err = decode_pcm16(&[], 24000, 1).unwrap_err();
        assert_eq!(err.kind, AudioErrorKind::EmptyPayload);
    }

    #[test]
    fn rejects_zero_channels() {
        let err = decode_pcm16(&[0, 0], 24000, 0).unwrap_err();
        assert_eq!(err.kind, AudioErrorKind::UnsupportedChannelCount(0));
    }

    #[test]
    fn rejects_zero_sample_rate() {
        let err = decode_pcm16(&[0, 0], 0, 1).unwrap_err();
        assert_eq!(err.kind, AudioErrorKind::ZeroSampleRate);
    }

    #[test]
    fn frame_count_and_duration_account_for_channels() {
        let bytes = [0u8; 24000 * 2 * 2]; // one second of stereo at 24 kHz
        let buffer = decode_pcm16(&bytes, 24000, 2).unwrap();
        assert_eq!(buffer.frame_count(), 24000);
        assert_eq!(buffer.duration(), Duration::from_secs(1));
    }

    #[test]
    fn channel_view_deinterleaves() {
        // stereo frames: (L=1, R=2), (L=3, R=4)
        let mut bytes = Vec::new();
        for value in [1i16, 2, 3, 4] {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        let buffer = decode_pcm16(&bytes, 24000, 2).unwrap();
        let left = buffer.channel(0);
        let right = buffer.channel(1);
        assert_eq!(left.len(), 2);
        assert_eq!(right.len(), 2);
        assert!(left[0] < left[1]);
        assert!(right[0] < right[1]);
    }
}
