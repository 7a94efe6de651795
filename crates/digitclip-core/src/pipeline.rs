//! Top-level orchestration: synthesize each digit and convert it to raw
//! PCM in the output directory.

use crate::config::ClipConfig;
use crate::engine::SpeechEngine;
use crate::error::{ClipError, ClipResult};
use crate::transcoder::Transcoder;
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The digits synthesized by one run, in ascending order
pub const DIGITS: RangeInclusive<u8> = 0..=9;

/// Print every available voice label, or a notice when the engine
/// reports none
///
/// # Errors
///
/// Returns an error if voice enumeration fails.
pub fn list_voices(engine: &mut dyn SpeechEngine) -> ClipResult<()> {
    let voices = engine.voices()?;
    if voices.is_empty() {
        println!("No voices reported by the speech engine.");
        return Ok(());
    }
    for voice in &voices {
        println!("{}", voice.label());
    }
    Ok(())
}

/// Generate one `.s16` clip per digit 0 through 9
///
/// Waveforms are synthesized into a scoped temporary directory that is
/// removed on every exit path; only the converted PCM files persist.
/// The first failure aborts the remaining digits and leaves previously
/// completed files in place. Returns the produced paths in digit order.
///
/// # Errors
///
/// Returns a usage error for a non-positive sample rate (before the
/// filesystem is touched), a synthesis error for a missing or empty
/// waveform, and a conversion error when the transcoder fails.
pub fn run(
    config: &ClipConfig,
    engine: &mut dyn SpeechEngine,
    transcoder: &dyn Transcoder,
) -> ClipResult<Vec<PathBuf>> {
    config.validate()?;

    fs::create_dir_all(&config.out_dir).map_err(|err| {
        ClipError::file(format!(
            "failed to create {}: {err}",
            config.out_dir.display()
        ))
    })?;

    let temp_dir = tempfile::Builder::new()
        .prefix("digitclip_")
        .tempdir()
        .map_err(|err| ClipError::file(format!("failed to create temp directory: {err}")))?;

    let mut produced = Vec::with_capacity(DIGITS.count());
    for digit in DIGITS {
        let digit_text = digit.to_string();
        let wav_path = temp_dir.path().join(format!("{digit_text}.wav"));
        let s16_path = config.output_path(digit);

        engine.synthesize_to_file(&digit_text, &wav_path)?;
        verify_waveform(&wav_path, &digit_text)?;
        transcoder.convert_to_raw_pcm(&wav_path, &s16_path, config.sample_rate_hz)?;

        println!("generated {}", s16_path.display());
        produced.push(s16_path);
    }

    info!(count = produced.len(), out_dir = %config.out_dir.display(), "digit clips written");
    Ok(produced)
}

/// A zero-byte waveform is a failed synthesis, not a valid silent clip
fn verify_waveform(path: &Path, digit_text: &str) -> ClipResult<()> {
    let size = fs::metadata(path).map(|meta| meta.len()).unwrap_or(0);
    if size == 0 {
        return Err(ClipError::synthesis(format!(
            "engine produced no audio for '{digit_text}'"
        )));
    }
    debug!(path = %path.display(), size, "waveform ready");
    Ok(())
}
