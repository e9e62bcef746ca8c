//! Audio payload inspection.

use std::io::Cursor;

/// Duration in seconds of a WAV payload, if it parses as one.
///
/// Used to annotate log lines for locally generated clips; anything hound
/// cannot read yields `None` and the clip is reported by size alone.
pub fn wav_duration(payload: &[u8]) -> Option<f32> {
    let reader = hound::WavReader::new(Cursor::new(payload)).ok()?;
    let spec = reader.spec();
    if spec.sample_rate == 0 {
        return None;
    }
    Some(reader.duration() as f32 / spec.sample_rate as f32)
}
