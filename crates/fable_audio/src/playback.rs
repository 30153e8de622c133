//! In-memory playback on the default output device.

use crate::NarrationBuffer;
use fable_error::{AudioError, AudioErrorKind, AudioResult};
use rodio::Sink;
use rodio::buffer::SamplesBuffer;
use tracing::debug;

/// Play a narration buffer, blocking until the sink drains.
///
/// # Errors
///
/// Returns [`AudioErrorKind::PlaybackUnavailable`] when no output device
/// can be opened.
pub fn play(buffer: &NarrationBuffer) -> AudioResult<()> {
    let stream = rodio::OutputStreamBuilder::open_default_stream()
        .map_err(|_| AudioError::new(AudioErrorKind::PlaybackUnavailable))?;

    debug!(
        frames = buffer.frame_count(),
        duration_ms = buffer.duration().as_millis() as u64,
        "Playing narration"
    );

    let source = SamplesBuffer::new(buffer.channels, buffer.sample_rate, buffer.samples.clone());
    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);
    sink.play();
    sink.sleep_until_end();

    drop(sink);
    drop(stream);
    Ok(())
}
