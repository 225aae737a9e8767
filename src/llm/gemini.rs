//! Gemini `generateContent` summarizer

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Settings;
use crate::llm::client::{LlmProvider, SummaryRequest};
use crate::llm::prompts::build_summary_prompt;

const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(45);

pub struct GeminiClient {
    http: Client,
    api_key: String,
    url: String,
    model: String,
}

impl GeminiClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let llm = &settings.llm;
        let api_key = llm.api_key.trim();
        if api_key.is_empty() {
            anyhow::bail!(
                "Gemini API key is missing. Set GOOGLE_API_KEY (or YTNOTES_GEMINI_API_KEY, or llm.api_key in config)."
            );
        }

        let model = or_default(&llm.model, DEFAULT_GEMINI_MODEL);
        let endpoint = or_default(&llm.endpoint, DEFAULT_GEMINI_ENDPOINT);
        let url = format!(
            "{}/models/{}:generateContent",
            endpoint.trim_end_matches('/'),
            model
        );

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build Gemini HTTP client")?;

        Ok(Self {
            http,
            api_key: api_key.to_string(),
            url,
            model: model.to_string(),
        })
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    match value.trim() {
        "" => default,
        trimmed => trimmed,
    }
}

#[async_trait]
impl LlmProvider for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn summarize(&self, request: SummaryRequest<'_>) -> Result<String> {
        let body = GenerateContentRequest::single_turn(build_summary_prompt(request.transcript));

        tracing::debug!(
            video_id = %request.video_id,
            model = %self.model,
            chars = request.transcript.len(),
            "Requesting Gemini summary"
        );

        // The key travels as a query parameter; strip URLs from errors so it
        // never reaches logs or the page.
        let response = self
            .http
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| e.without_url())
            .context("Gemini request failed")?
            .error_for_status()
            .map_err(|e| e.without_url())
            .context("Gemini returned an error status")?;

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| e.without_url())
            .context("Failed to parse Gemini response")?;

        payload.into_summary()
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

impl GenerateContentRequest {
    fn single_turn(prompt: String) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// First non-blank text part across candidates.
    fn into_summary(self) -> Result<String> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            anyhow::bail!("Gemini blocked the request: {}", reason);
        }

        self.candidates
            .into_iter()
            .flat_map(|c| c.content.parts)
            .filter_map(|p| p.text)
            .map(|t| t.trim().to_string())
            .find(|t| !t.is_empty())
            .context("Gemini response did not contain summary text")
    }
}
