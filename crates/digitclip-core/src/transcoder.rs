//! Waveform-to-raw-PCM conversion through an external transcoder.

use crate::error::{ClipError, ClipResult};
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Trait for converting waveform files to raw mono signed 16-bit
/// little-endian PCM
pub trait Transcoder {
    /// Verify the transcoder binary is reachable before any engine work
    ///
    /// # Errors
    ///
    /// Returns an environment error if the binary cannot be invoked.
    fn ensure_available(&self) -> ClipResult<()>;

    /// Convert `input` into headerless s16le PCM at `sample_rate_hz`,
    /// overwriting `output` if it exists
    ///
    /// # Errors
    ///
    /// Returns a conversion error if the transcoder exits with a
    /// failure status.
    fn convert_to_raw_pcm(
        &self,
        input: &Path,
        output: &Path,
        sample_rate_hz: i64,
    ) -> ClipResult<()>;
}

/// Transcoder backed by the ffmpeg command-line tool
pub struct FfmpegTranscoder {
    program: String,
}

impl FfmpegTranscoder {
    /// Create a transcoder invoking `ffmpeg` from the search path
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: "ffmpeg".to_string(),
        }
    }

    /// Arguments for one conversion: forced mono downmix, forced target
    /// rate, forced raw s16le output, overwrite allowed
    fn convert_args(input: &Path, output: &Path, sample_rate_hz: i64) -> Vec<OsString> {
        vec![
            OsString::from("-y"),
            OsString::from("-i"),
            input.as_os_str().to_owned(),
            OsString::from("-vn"),
            OsString::from("-ac"),
            OsString::from("1"),
            OsString::from("-ar"),
            OsString::from(sample_rate_hz.to_string()),
            OsString::from("-f"),
            OsString::from("s16le"),
            output.as_os_str().to_owned(),
        ]
    }
}

impl Default for FfmpegTranscoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcoder for FfmpegTranscoder {
    fn ensure_available(&self) -> ClipResult<()> {
        match Command::new(&self.program)
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
        {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => Err(ClipError::environment(format!(
                "{} -version exited with {status}",
                self.program
            ))),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(ClipError::environment(
                format!("{} not found in PATH", self.program),
            )),
            Err(err) => Err(ClipError::environment(format!(
                "failed to run {}: {err}",
                self.program
            ))),
        }
    }

    fn convert_to_raw_pcm(
        &self,
        input: &Path,
        output: &Path,
        sample_rate_hz: i64,
    ) -> ClipResult<()> {
        let status = Command::new(&self.program)
            .args(Self::convert_args(input, output, sample_rate_hz))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|err| {
                ClipError::conversion(format!("failed to run {}: {err}", self.program))
            })?;

        if !status.success() {
            return Err(ClipError::conversion(format!(
                "{} exited with {} for {}",
                self.program,
                status,
                input.display()
            )));
        }

        debug!(output = %output.display(), sample_rate_hz, "waveform converted to raw pcm");
        Ok(())
    }
}
