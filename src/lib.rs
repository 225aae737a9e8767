//! ytnotes - Turn YouTube video transcripts into concise AI-generated notes
//!
//! Resolves a video link, fetches its captions in the first available
//! preferred language and asks Gemini for a bullet-point summary.

pub mod cli;
pub mod config;
pub mod llm;
pub mod notes;
pub mod transcript;
pub mod video;
pub mod web;

use thiserror::Error;

use crate::transcript::AcquisitionError;

/// Main error type for ytnotes
#[derive(Error, Debug)]
pub enum NotesError {
    #[error("Invalid YouTube URL: no video identifier found in '{0}'")]
    InvalidUrl(String),

    #[error(transparent)]
    Transcript(#[from] AcquisitionError),

    #[error("Summarization failed: {0}")]
    Summarization(String),
}

impl NotesError {
    /// Message suitable for showing to the person who submitted the link.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidUrl(_) => {
                "That does not look like a YouTube video link. Try a watch, youtu.be, embed or /v/ URL."
                    .to_string()
            }
            Self::Transcript(AcquisitionError::NoTranscriptAvailable { languages }) => format!(
                "No transcript is available for this video in any of the tried languages ({}).",
                languages.join(", ")
            ),
            Self::Transcript(AcquisitionError::TranscriptsDisabled) => {
                "Transcripts are disabled for this video.".to_string()
            }
            Self::Transcript(AcquisitionError::Service(message)) => {
                format!("Could not fetch the transcript: {}", message)
            }
            Self::Summarization(message) => format!("Could not generate notes: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, NotesError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "ytnotes";
