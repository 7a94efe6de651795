//! Voice descriptors and substring-based selection.

use crate::engine::SpeechEngine;
use crate::error::{ClipError, ClipResult};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Identity of a selectable synthetic voice, as reported by the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    /// Human-readable display name
    pub name: String,
    /// Opaque engine identifier
    pub id: String,
}

impl Voice {
    /// Create a new voice descriptor
    pub fn new<N: Into<String>, I: Into<String>>(name: N, id: I) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }

    /// Display label in the form `<name> [<id>]`, trimmed of surrounding
    /// whitespace
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} [{}]", self.name, self.id).trim().to_string()
    }

    /// True if the lowercased needle occurs in the name or the id
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.id.to_lowercase().contains(needle)
    }
}

/// Resolve a non-empty query to the first voice whose name or id contains
/// it, case-insensitively. Ties are broken by enumeration order.
///
/// # Errors
///
/// Returns a selection error listing every available voice label when
/// nothing matches.
pub fn find_match<'a>(voices: &'a [Voice], query: &str) -> ClipResult<&'a Voice> {
    debug_assert!(!query.is_empty(), "empty query is a selection no-op");

    let needle = query.to_lowercase();
    if let Some(voice) = voices.iter().find(|voice| voice.matches(&needle)) {
        return Ok(voice);
    }

    let available = voices
        .iter()
        .map(Voice::label)
        .collect::<Vec<_>>()
        .join(", ");
    Err(ClipError::voice_not_found(query, available))
}

/// Apply the configured voice query to the engine
///
/// An empty query is a no-op and leaves the engine's default voice
/// active; otherwise the engine's voices are enumerated and the first
/// match is selected.
///
/// # Errors
///
/// Returns an error if voice enumeration fails or the query matches
/// nothing.
pub fn apply_selection(engine: &mut dyn SpeechEngine, query: &str) -> ClipResult<()> {
    if query.is_empty() {
        return Ok(());
    }

    let voices = engine.voices()?;
    let selected = find_match(&voices, query)?;
    info!(voice = %selected.label(), "voice selected");
    engine.set_voice(&selected.id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn english_voices() -> Vec<Voice> {
        vec![
            Voice::new("English (America)", "en-us-1"),
            Voice::new("English (Britain)", "en-gb-1"),
        ]
    }

    struct RecordingEngine {
        voices: Vec<Voice>,
        voices_calls: usize,
        selected: Option<String>,
    }

    impl RecordingEngine {
        fn new(voices: Vec<Voice>) -> Self {
            Self {
                voices,
                voices_calls: 0,
                selected: None,
            }
        }
    }

    impl SpeechEngine for RecordingEngine {
        fn set_rate(&mut self, _wpm: i32) {}

        fn set_voice(&mut self, voice_id: &str) {
            self.selected = Some(voice_id.to_string());
        }

        fn voices(&mut self) -> ClipResult<Vec<Voice>> {
            self.voices_calls += 1;
            Ok(self.voices.clone())
        }

        fn synthesize_to_file(&mut self, _text: &str, _dest: &Path) -> ClipResult<()> {
            unreachable!("selection never synthesizes")
        }

        fn shutdown(&mut self) {}
    }

    #[test]
    fn test_label_format() {
        let voice = Voice::new("English (America)", "en-us-1");
        assert_eq!(voice.label(), "English (America) [en-us-1]");
    }

    #[test]
    fn test_label_trims_when_name_missing() {
        let voice = Voice::new("", "en-us-1");
        assert_eq!(voice.label(), "[en-us-1]");
    }

    #[test]
    fn test_find_match_by_name_substring() {
        let voices = english_voices();
        let selected = find_match(&voices, "britain").expect("should match");
        assert_eq!(selected.id, "en-gb-1");
    }

    #[test]
    fn test_find_match_is_case_insensitive() {
        let voices = english_voices();
        let selected = find_match(&voices, "AMERICA").expect("should match");
        assert_eq!(selected.id, "en-us-1");
    }

    #[test]
    fn test_find_match_by_id_substring() {
        let voices = english_voices();
        let selected = find_match(&voices, "gb-1").expect("should match");
        assert_eq!(selected.name, "English (Britain)");
    }

    #[test]
    fn test_find_match_first_wins() {
        let voices = english_voices();
        let selected = find_match(&voices, "english").expect("should match");
        assert_eq!(selected.id, "en-us-1");
    }

    #[test]
    fn test_find_match_failure_lists_alternatives() {
        let voices = english_voices();
        let err = find_match(&voices, "xyz").expect_err("should not match");
        let message = err.to_string();

        assert!(message.contains("English (America) [en-us-1]"));
        assert!(message.contains("English (Britain) [en-gb-1]"));
        assert!(message.contains("[en-us-1], English"));
    }

    #[test]
    fn test_find_match_empty_voice_list() {
        let err = find_match(&[], "anything").expect_err("nothing to match");
        assert!(matches!(err, ClipError::VoiceNotFound { .. }));
    }

    #[test]
    fn test_apply_selection_empty_query_is_noop() {
        let mut engine = RecordingEngine::new(english_voices());
        apply_selection(&mut engine, "").expect("no-op should succeed");

        assert_eq!(engine.voices_calls, 0);
        assert_eq!(engine.selected, None);
    }

    #[test]
    fn test_apply_selection_sets_matched_voice() {
        let mut engine = RecordingEngine::new(english_voices());
        apply_selection(&mut engine, "britain").expect("should select");

        assert_eq!(engine.voices_calls, 1);
        assert_eq!(engine.selected.as_deref(), Some("en-gb-1"));
    }

    #[test]
    fn test_apply_selection_propagates_no_match() {
        let mut engine = RecordingEngine::new(english_voices());
        let err = apply_selection(&mut engine, "xyz").expect_err("should fail");

        assert!(matches!(err, ClipError::VoiceNotFound { .. }));
        assert_eq!(engine.selected, None);
    }

    #[test]
    fn test_voice_serialization() {
        let voice = Voice::new("Zira", "tts_ms_en-us_zira");
        let json = serde_json::to_string(&voice).expect("Should serialize");
        let deserialized: Voice = serde_json::from_str(&json).expect("Should deserialize");
        assert_eq!(voice, deserialized);
    }
}
