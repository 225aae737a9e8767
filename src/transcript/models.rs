//! Transcript data models

use serde::{Deserialize, Serialize};
use std::fmt;

/// One timed caption unit as returned by the transcript service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptFragment {
    /// Caption text
    pub text: String,

    /// Start offset in seconds
    pub start: f64,

    /// Duration in seconds
    pub duration: f64,
}

impl TranscriptFragment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}

/// Joined transcript for the language that was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptText {
    /// Language code the transcript was fetched in
    pub language: String,

    /// Fragment texts joined with single spaces
    pub text: String,
}

impl TranscriptText {
    /// Join fragment texts in their original order with single spaces.
    ///
    /// No other normalization is applied.
    pub fn join(language: impl Into<String>, fragments: &[TranscriptFragment]) -> Self {
        let text = fragments
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            language: language.into(),
            text,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for TranscriptText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_uses_single_spaces_in_order() {
        let fragments = vec![
            TranscriptFragment::new("Hello", 0.0, 1.0),
            TranscriptFragment::new("world", 1.0, 1.0),
        ];
        assert_eq!(TranscriptText::join("en", &fragments).text, "Hello world");
    }

    #[test]
    fn join_keeps_inner_whitespace_and_punctuation() {
        let fragments = vec![
            TranscriptFragment::new("  So,  um", 0.0, 1.5),
            TranscriptFragment::new("[Music]", 1.5, 2.0),
            TranscriptFragment::new("OK!", 3.5, 0.5),
        ];
        assert_eq!(
            TranscriptText::join("en", &fragments).text,
            "  So,  um [Music] OK!"
        );
    }
}
