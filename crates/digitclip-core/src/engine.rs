//! Capability seam for offline speech engines.

use crate::error::ClipResult;
use crate::voice::Voice;
use std::path::Path;

/// Trait for offline text-to-speech engines
///
/// Orchestration code only depends on this seam, so a different backend
/// can be swapped in without touching the pipeline. All operations block
/// until the engine finishes; there is no concurrency in this program.
pub trait SpeechEngine {
    /// Set the speech rate in words per minute; bounds are not validated
    /// here, the engine applies whatever it is given
    fn set_rate(&mut self, wpm: i32);

    /// Select a voice by its opaque identifier for subsequent synthesis
    fn set_voice(&mut self, voice_id: &str);

    /// Enumerate the voices the engine offers; an empty list is valid
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot be queried.
    fn voices(&mut self) -> ClipResult<Vec<Voice>>;

    /// Synthesize `text` into a waveform file at `dest`
    ///
    /// # Errors
    ///
    /// Returns a synthesis error if the engine fails to produce the file.
    fn synthesize_to_file(&mut self, text: &str, dest: &Path) -> ClipResult<()>;

    /// Release engine resources; called exactly once at the end of a run,
    /// including the list-voices early exit
    fn shutdown(&mut self);
}
