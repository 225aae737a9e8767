//! Transcript service boundary

use async_trait::async_trait;
use thiserror::Error;

use crate::transcript::TranscriptFragment;
use crate::video::VideoId;

/// Failure kinds reported by a transcript service for a single request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The video has captions, just not in the requested language.
    #[error("No transcript found for language '{language}'")]
    NoTranscriptFound { language: String },

    /// The owner has disabled captions for the video.
    #[error("Transcripts are disabled for this video")]
    TranscriptsDisabled,

    /// The video itself cannot be served (unavailable, private, age
    /// restricted, request blocked). No other language will do better.
    #[error("Could not retrieve transcript: {0}")]
    CouldNotRetrieve(String),

    /// Transport failure, timeout or malformed payload.
    #[error("Transcript service error: {0}")]
    Unexpected(String),
}

/// Source of timed captions for a single video and language.
#[async_trait]
pub trait TranscriptService: Send + Sync {
    async fn fetch(
        &self,
        video_id: &VideoId,
        language: &str,
    ) -> Result<Vec<TranscriptFragment>, FetchError>;
}
