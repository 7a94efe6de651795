//! Run configuration, resolved once at startup and read-only thereafter.

use crate::error::{ClipError, ClipResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipConfig {
    /// Substring filter for voice selection; empty means the engine's
    /// default voice stays active
    pub voice_query: String,
    /// Speech rate in words per minute, passed through to the engine
    /// unvalidated
    pub rate_wpm: i32,
    /// Output sample rate in Hz for generated `.s16` files
    pub sample_rate_hz: i64,
    /// Output directory for generated `.s16` files
    pub out_dir: PathBuf,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            voice_query: String::new(),
            rate_wpm: crate::DEFAULT_RATE_WPM,
            sample_rate_hz: crate::DEFAULT_SAMPLE_RATE_HZ,
            out_dir: PathBuf::from(crate::DEFAULT_OUT_DIR),
        }
    }
}

impl ClipConfig {
    /// Set the voice substring query
    #[must_use]
    pub fn with_voice_query<S: Into<String>>(mut self, query: S) -> Self {
        self.voice_query = query.into();
        self
    }

    /// Set the speech rate in words per minute
    #[must_use]
    pub fn with_rate_wpm(mut self, rate_wpm: i32) -> Self {
        self.rate_wpm = rate_wpm;
        self
    }

    /// Set the output sample rate in Hz
    #[must_use]
    pub fn with_sample_rate(mut self, sample_rate_hz: i64) -> Self {
        self.sample_rate_hz = sample_rate_hz;
        self
    }

    /// Set the output directory
    #[must_use]
    pub fn with_out_dir<P: Into<PathBuf>>(mut self, out_dir: P) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a usage error if the sample rate is not positive.
    pub fn validate(&self) -> ClipResult<()> {
        if self.sample_rate_hz <= 0 {
            return Err(ClipError::usage(format!(
                "sample-rate must be > 0, got {}",
                self.sample_rate_hz
            )));
        }
        Ok(())
    }

    /// Final PCM path for one digit: `<out-dir>/<digit>_<sample_rate>.s16`
    #[must_use]
    pub fn output_path(&self, digit: u8) -> PathBuf {
        self.out_dir
            .join(format!("{digit}_{}.s16", self.sample_rate_hz))
    }
}
