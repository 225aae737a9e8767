//! Notes pipeline orchestration

use anyhow::Result as AnyResult;
use serde::Serialize;
use std::sync::Arc;

use crate::config::Settings;
use crate::llm::{build_provider, LlmProvider, SummaryRequest};
use crate::transcript::{acquire, TranscriptService, TranscriptText, YoutubeTranscriptClient};
use crate::video::{resolve, VideoId};
use crate::{NotesError, Result};

/// Notes generated for one video.
#[derive(Debug, Clone, Serialize)]
pub struct VideoNotes {
    pub video_id: VideoId,
    pub language: String,
    pub transcript: String,
    pub summary: String,
}

impl VideoNotes {
    pub fn thumbnail_url(&self) -> String {
        self.video_id.thumbnail_url()
    }
}

/// Resolve a link and fetch its transcript.
///
/// An unrecognized link fails before any request is made.
pub async fn fetch_transcript(
    service: &dyn TranscriptService,
    url: &str,
    languages: &[String],
) -> Result<(VideoId, TranscriptText)> {
    let video_id = resolve(url).ok_or_else(|| NotesError::InvalidUrl(url.trim().to_string()))?;

    tracing::info!(video_id = %video_id, "Fetching transcript");
    let transcript = acquire(service, &video_id, languages).await?;

    Ok((video_id, transcript))
}

/// Link-to-notes pipeline shared by the CLI and the web form.
pub struct NotesPipeline {
    transcripts: Arc<dyn TranscriptService>,
    summarizer: Arc<dyn LlmProvider>,
    languages: Vec<String>,
}

impl NotesPipeline {
    pub fn new(
        transcripts: Arc<dyn TranscriptService>,
        summarizer: Arc<dyn LlmProvider>,
        languages: Vec<String>,
    ) -> Self {
        Self {
            transcripts,
            summarizer,
            languages,
        }
    }

    /// Build the production pipeline. Fails when no Gemini key is configured.
    pub fn from_settings(settings: &Settings) -> AnyResult<Self> {
        let summarizer = build_provider(settings)?;
        let transcripts = Arc::new(YoutubeTranscriptClient::from_settings(settings)?);

        Ok(Self::new(
            transcripts,
            summarizer,
            settings.transcript.languages.clone(),
        ))
    }

    /// Replace the language preference list.
    pub fn with_languages(mut self, languages: Vec<String>) -> Self {
        self.languages = languages;
        self
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub async fn transcript(&self, url: &str) -> Result<(VideoId, TranscriptText)> {
        fetch_transcript(self.transcripts.as_ref(), url, &self.languages).await
    }

    /// Resolve, fetch and summarize a video link.
    pub async fn notes(&self, url: &str) -> Result<VideoNotes> {
        let (video_id, transcript) = self.transcript(url).await?;

        tracing::info!(
            video_id = %video_id,
            language = %transcript.language,
            chars = transcript.text.len(),
            "Generating notes"
        );

        let summary = self
            .summarizer
            .summarize(SummaryRequest {
                video_id: &video_id,
                transcript: transcript.as_str(),
            })
            .await
            .map_err(|e| NotesError::Summarization(format!("{:#}", e)))?;

        Ok(VideoNotes {
            video_id,
            language: transcript.language,
            transcript: transcript.text,
            summary,
        })
    }
}
