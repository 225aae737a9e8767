//! Multi-language transcript acquisition

use thiserror::Error;
use tracing::{debug, info};

use crate::transcript::{FetchError, TranscriptService, TranscriptText};
use crate::video::VideoId;

/// Why no transcript text could be produced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AcquisitionError {
    #[error("No transcript available in any of: {}", format_languages(.languages))]
    NoTranscriptAvailable { languages: Vec<String> },

    #[error("Transcripts are disabled for this video")]
    TranscriptsDisabled,

    #[error("Transcript service error: {0}")]
    Service(String),
}

fn format_languages(languages: &[String]) -> String {
    if languages.is_empty() {
        "(no languages configured)".to_string()
    } else {
        languages.join(", ")
    }
}

/// Fetch the transcript in the first available language.
///
/// Languages are tried in order with one service call each; the first one
/// yielding non-blank text wins. Only a per-language miss moves on to the
/// next language. Disabled captions and video-level failures end the search.
pub async fn acquire(
    service: &dyn TranscriptService,
    video_id: &VideoId,
    languages: &[String],
) -> Result<TranscriptText, AcquisitionError> {
    for language in languages {
        match service.fetch(video_id, language).await {
            Ok(fragments) => {
                let transcript = TranscriptText::join(language.as_str(), &fragments);
                if transcript.text.trim().is_empty() {
                    debug!(video_id = %video_id, language = %language, "Transcript track is blank");
                    continue;
                }

                info!(
                    video_id = %video_id,
                    language = %language,
                    fragments = fragments.len(),
                    "Transcript acquired"
                );
                return Ok(transcript);
            }
            Err(FetchError::NoTranscriptFound { .. }) => {
                debug!(video_id = %video_id, language = %language, "No transcript in language");
            }
            Err(FetchError::TranscriptsDisabled) => {
                return Err(AcquisitionError::TranscriptsDisabled);
            }
            Err(FetchError::CouldNotRetrieve(message)) | Err(FetchError::Unexpected(message)) => {
                return Err(AcquisitionError::Service(message));
            }
        }
    }

    Err(AcquisitionError::NoTranscriptAvailable {
        languages: languages.to_vec(),
    })
}
