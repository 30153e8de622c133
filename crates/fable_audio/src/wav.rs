//! WAV container writing.

use crate::NarrationBuffer;
use fable_error::{AudioError, AudioErrorKind, AudioResult};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Serialize a narration buffer as a 16-bit PCM WAV file in memory.
///
/// Samples are re-quantized from f32 and clamped to the i16 range under the
/// canonical 44-byte RIFF/WAVE header.
pub fn wav_bytes(buffer: &NarrationBuffer) -> Vec<u8> {
    let channels = buffer.channels;
    let sample_rate = buffer.sample_rate;
    let bits_per_sample: u16 = 16;
    let block_align = channels * (bits_per_sample / 8);
    let byte_rate = sample_rate * block_align as u32;
    let data_len = (buffer.samples.len() * 2) as u32;

    let mut out = Vec::with_capacity(44 + data_len as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&channels.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&bits_per_sample.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());

    for sample in &buffer.samples {
        let quantized = (sample * 32768.0).clamp(i16::MIN as f32, i16::MAX as f32) as i16;
        out.extend_from_slice(&quantized.to_le_bytes());
    }

    out
}

/// Write a narration buffer to disk as a WAV file.
///
/// # Errors
///
/// Returns [`AudioErrorKind::Io`] when the file cannot be created or
/// written.
pub fn write_wav(path: &Path, buffer: &NarrationBuffer) -> AudioResult<()> {
    let bytes = wav_bytes(buffer);
    let mut file = std::fs::File::create(path)
        .map_err(|e| AudioError::new(AudioErrorKind::Io(e.to_string())))?;
    file.write_all(&bytes)
        .map_err(|e| AudioError::new(AudioErrorKind::Io(e.to_string())))?;
    debug!(path = %path.display(), bytes = bytes.len(), "Wrote narration WAV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tone_buffer() -> NarrationBuffer {
        NarrationBuffer {
            sample_rate: 24000,
            channels: 1,
            samples: vec![0.0, 0.5, -0.5, 1.0],
        }
    }

    #[test]
    fn header_fields_are_correct() {
        let bytes = wav_bytes(&tone_buffer());
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[12..16], b"fmt ");
        // channel count
        assert_eq!(u16::from_le_bytes([bytes[22], bytes[23]]), 1);
        // sample rate
        assert_eq!(
            u32::from_le_bytes([bytes[24], bytes[25], bytes[26], bytes[27]]),
            24000
        );
        // data chunk length: 4 samples * 2 bytes
        assert_eq!(
            u32::from_le_bytes([bytes[40], bytes[41], bytes[42], bytes[43]]),
            8
        );
        assert_eq!(bytes.len(), 44 + 8);
    }

    #[test]
    fn full_scale_sample_clamps_instead_of_wrapping() {
        let bytes = wav_bytes(&tone_buffer());
        // last sample was 1.0, which exceeds i16::MAX after scaling
        let last = i16::from_le_bytes([bytes[50], bytes[51]]);
        assert_eq!(last, i16::MAX);
    }

    #[test]
    fn write_wav_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("narration.wav");
        write_wav(&path, &tone_buffer()).unwrap();
        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, wav_bytes(&tone_buffer()));
    }
}
