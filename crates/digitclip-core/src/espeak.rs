//! Offline speech synthesis through the espeak-ng command-line engine.

use crate::engine::SpeechEngine;
use crate::error::{ClipError, ClipResult};
use crate::voice::Voice;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Engine binaries probed in order at initialization
const ENGINE_CANDIDATES: [&str; 2] = ["espeak-ng", "espeak"];

/// Speech engine adapter driving espeak-ng as a subprocess
///
/// Rate and voice are stored on the adapter and applied on every
/// synthesis invocation; espeak takes them as per-call flags rather than
/// persistent state.
pub struct EspeakEngine {
    program: &'static str,
    rate_wpm: i32,
    voice_id: Option<String>,
}

impl EspeakEngine {
    /// Probe for a usable espeak binary and construct the adapter
    ///
    /// # Errors
    ///
    /// Returns an initialization error if neither `espeak-ng` nor
    /// `espeak` responds; the message tells the operator how to install
    /// a backend.
    pub fn initialize() -> ClipResult<Self> {
        for (index, program) in ENGINE_CANDIDATES.iter().copied().enumerate() {
            if !probe(program) {
                continue;
            }
            if index > 0 {
                warn!(program, "espeak-ng not found, using fallback engine");
            }
            debug!(program, "speech engine ready");
            return Ok(Self {
                program,
                rate_wpm: crate::DEFAULT_RATE_WPM,
                voice_id: None,
            });
        }

        Err(ClipError::initialization(
            "no espeak binary responded. Install a system TTS backend \
             (for example, `espeak-ng` on Linux).",
        ))
    }

    /// Arguments for one synthesis invocation
    fn synth_args(&self, text: &str, dest: &Path) -> Vec<OsString> {
        let mut args = vec![
            OsString::from("-s"),
            OsString::from(self.rate_wpm.to_string()),
        ];
        if let Some(voice_id) = &self.voice_id {
            args.push(OsString::from("-v"));
            args.push(OsString::from(voice_id));
        }
        args.push(OsString::from("-w"));
        args.push(dest.as_os_str().to_owned());
        args.push(OsString::from(text));
        args
    }

    /// Parse the tabular output of `espeak-ng --voices`
    ///
    /// Columns are `Pty Language Age/Gender VoiceName File ...`; the
    /// header and rows with too few columns are skipped. espeak prints
    /// voice names with underscores in place of spaces.
    fn parse_voices(listing: &str) -> Vec<Voice> {
        listing
            .lines()
            .skip(1)
            .filter_map(|line| {
                let fields: Vec<&str> = line.split_whitespace().collect();
                if fields.len() < 5 {
                    return None;
                }
                Some(Voice::new(fields[3].replace('_', " "), fields[4]))
            })
            .collect()
    }
}

fn probe(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

impl SpeechEngine for EspeakEngine {
    fn set_rate(&mut self, wpm: i32) {
        self.rate_wpm = wpm;
    }

    fn set_voice(&mut self, voice_id: &str) {
        self.voice_id = Some(voice_id.to_string());
    }

    fn voices(&mut self) -> ClipResult<Vec<Voice>> {
        let output = Command::new(self.program)
            .arg("--voices")
            .output()
            .map_err(|err| {
                ClipError::initialization(format!(
                    "failed to run {} --voices: {err}",
                    self.program
                ))
            })?;

        if !output.status.success() {
            return Err(ClipError::initialization(format!(
                "{} --voices exited with {}",
                self.program, output.status
            )));
        }

        Ok(Self::parse_voices(&String::from_utf8_lossy(&output.stdout)))
    }

    fn synthesize_to_file(&mut self, text: &str, dest: &Path) -> ClipResult<()> {
        let status = Command::new(self.program)
            .args(self.synth_args(text, dest))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|err| {
                ClipError::synthesis(format!("failed to run {}: {err}", self.program))
            })?;

        if !status.success() {
            return Err(ClipError::synthesis(format!(
                "{} exited with {} for '{text}'",
                self.program, status
            )));
        }

        debug!(text, dest = %dest.display(), "waveform synthesized");
        Ok(())
    }

    fn shutdown(&mut self) {
        debug!(program = self.program, "speech engine released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const LISTING: &str = "\
Pty Language       Age/Gender VoiceName          File                 Other Languages
 5  af              --/M      Afrikaans          gmw/af
 5  en-gb           --/M      English_(Great_Britain) gmw/en-GB       (en 2)
 5  en-us           --/M      English_(America)  gmw/en-US            (en 3)
";

    #[test]
    fn test_parse_voices_skips_header() {
        let voices = EspeakEngine::parse_voices(LISTING);
        assert_eq!(voices.len(), 3);
        assert_eq!(voices[0], Voice::new("Afrikaans", "gmw/af"));
    }

    #[test]
    fn test_parse_voices_restores_spaces_in_names() {
        let voices = EspeakEngine::parse_voices(LISTING);
        assert_eq!(voices[1].name, "English (Great Britain)");
        assert_eq!(voices[1].id, "gmw/en-GB");
    }

    #[test]
    fn test_parse_voices_skips_malformed_rows() {
        let listing = "header\n\n 5  en\n 5  en              --/M      English             gmw/en\n";
        let voices = EspeakEngine::parse_voices(listing);
        assert_eq!(voices.len(), 1);
        assert_eq!(voices[0], Voice::new("English", "gmw/en"));
    }

    #[test]
    fn test_parse_voices_empty_listing() {
        assert!(EspeakEngine::parse_voices("").is_empty());
        assert!(EspeakEngine::parse_voices("header only\n").is_empty());
    }

    #[test]
    fn test_synth_args_without_voice() {
        let engine = EspeakEngine {
            program: "espeak-ng",
            rate_wpm: 170,
            voice_id: None,
        };
        let args = engine.synth_args("7", &PathBuf::from("/tmp/7.wav"));

        assert_eq!(
            args,
            vec![
                OsString::from("-s"),
                OsString::from("170"),
                OsString::from("-w"),
                OsString::from("/tmp/7.wav"),
                OsString::from("7"),
            ]
        );
    }

    #[test]
    fn test_synth_args_with_voice() {
        let engine = EspeakEngine {
            program: "espeak-ng",
            rate_wpm: 140,
            voice_id: Some("gmw/en-GB".to_string()),
        };
        let args = engine.synth_args("3", &PathBuf::from("3.wav"));

        assert!(args
            .windows(2)
            .any(|pair| pair == [OsString::from("-v"), OsString::from("gmw/en-GB")]));
        assert!(args
            .windows(2)
            .any(|pair| pair == [OsString::from("-s"), OsString::from("140")]));
        assert_eq!(args.last(), Some(&OsString::from("3")));
    }
}
