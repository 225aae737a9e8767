//! YouTube caption client
//!
//! Fetches caption tracks through `yt_transcript_rs` and maps its failure
//! reasons onto [`FetchError`].

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use yt_transcript_rs::api::YouTubeTranscriptApi;
use yt_transcript_rs::errors::{CouldNotRetrieveTranscript, CouldNotRetrieveTranscriptReason};

use crate::config::Settings;
use crate::transcript::{FetchError, TranscriptFragment, TranscriptService};
use crate::video::VideoId;

/// Transcript service backed by youtube.com.
pub struct YoutubeTranscriptClient {
    api: YouTubeTranscriptApi,
    timeout: Duration,
}

impl YoutubeTranscriptClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .context("Failed to create YouTube transcript client")?;

        Ok(Self { api, timeout })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(Duration::from_secs(settings.transcript.timeout_secs))
    }
}

#[async_trait]
impl TranscriptService for YoutubeTranscriptClient {
    async fn fetch(
        &self,
        video_id: &VideoId,
        language: &str,
    ) -> Result<Vec<TranscriptFragment>, FetchError> {
        debug!(video_id = %video_id, language = %language, "Requesting transcript");

        // Formatting tags are stripped by the client.
        let languages = [language];
        let request = self
            .api
            .fetch_transcript(video_id.as_str(), &languages, false);

        let transcript = match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok(transcript)) => transcript,
            Ok(Err(err)) => return Err(classify(&err, language)),
            Err(_) => {
                return Err(FetchError::Unexpected(format!(
                    "YouTube did not answer within {}s",
                    self.timeout.as_secs()
                )))
            }
        };

        Ok(non_blank_fragments(
            transcript
                .snippets
                .into_iter()
                .map(|s| (s.text, s.start, s.duration)),
        ))
    }
}

fn classify(err: &CouldNotRetrieveTranscript, language: &str) -> FetchError {
    classify_reason(err.reason.as_ref(), language, err.to_string())
}

/// Per-language misses, disabled captions, video-level refusals, and
/// everything else.
fn classify_reason(
    reason: Option<&CouldNotRetrieveTranscriptReason>,
    language: &str,
    detail: String,
) -> FetchError {
    use CouldNotRetrieveTranscriptReason as Reason;

    match reason {
        Some(Reason::NoTranscriptFound { .. }) => FetchError::NoTranscriptFound {
            language: language.to_string(),
        },
        Some(Reason::TranscriptsDisabled { .. }) => FetchError::TranscriptsDisabled,
        Some(
            Reason::VideoUnavailable { .. }
            | Reason::VideoUnplayable { .. }
            | Reason::AgeRestricted { .. }
            | Reason::InvalidVideoId { .. }
            | Reason::IpBlocked { .. }
            | Reason::RequestBlocked { .. },
        ) => FetchError::CouldNotRetrieve(detail),
        _ => FetchError::Unexpected(detail),
    }
}

/// Caption elements without text carry nothing to summarize.
fn non_blank_fragments(
    snippets: impl IntoIterator<Item = (String, f64, f64)>,
) -> Vec<TranscriptFragment> {
    snippets
        .into_iter()
        .filter(|(text, _, _)| !text.trim().is_empty())
        .map(|(text, start, duration)| TranscriptFragment::new(text, start, duration))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use CouldNotRetrieveTranscriptReason as Reason;

    #[test]
    fn disabled_captions_are_reported_as_such() {
        let err = classify_reason(Some(&Reason::TranscriptsDisabled), "en", "disabled".into());

        assert_eq!(err, FetchError::TranscriptsDisabled);
    }

    #[test]
    fn unavailable_video_cannot_be_retrieved() {
        let err = classify_reason(
            Some(&Reason::VideoUnavailable),
            "en",
            "The video is no longer available".into(),
        );

        assert_eq!(
            err,
            FetchError::CouldNotRetrieve("The video is no longer available".into())
        );
    }

    #[test]
    fn unknown_failure_is_unexpected() {
        let err = classify_reason(None, "en", "connection reset".into());

        assert_eq!(err, FetchError::Unexpected("connection reset".into()));
    }

    #[test]
    fn blank_caption_elements_are_dropped() {
        let fragments = non_blank_fragments(vec![
            (String::new(), 0.0, 1.0),
            ("Hello".to_string(), 1.0, 1.5),
            ("  ".to_string(), 2.5, 0.5),
            ("world".to_string(), 3.0, 1.0),
        ]);

        assert_eq!(
            fragments,
            vec![
                TranscriptFragment::new("Hello", 1.0, 1.5),
                TranscriptFragment::new("world", 3.0, 1.0),
            ]
        );
    }

    #[test]
    fn all_blank_track_yields_no_fragments() {
        let fragments =
            non_blank_fragments(vec![(String::new(), 0.0, 1.0), (String::new(), 1.0, 1.0)]);

        assert!(fragments.is_empty());
    }

    #[test]
    fn client_builds_with_configured_timeout() {
        let mut settings = Settings::default();
        settings.transcript.timeout_secs = 7;

        let client = YoutubeTranscriptClient::from_settings(&settings).unwrap();

        assert_eq!(client.timeout, Duration::from_secs(7));
    }
}
