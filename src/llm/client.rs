//! Summarizer boundary

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::config::Settings;
use crate::llm::gemini::GeminiClient;
use crate::video::VideoId;

/// Providers `llm.provider` may name.
pub const SUPPORTED_PROVIDERS: &[&str] = &["gemini"];

/// One transcript to be condensed into notes.
pub struct SummaryRequest<'a> {
    pub video_id: &'a VideoId,
    pub transcript: &'a str,
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Short name used in logs and diagnostics.
    fn name(&self) -> &str;

    async fn summarize(&self, request: SummaryRequest<'_>) -> Result<String>;
}

/// Build the configured summarizer. Fails on unknown providers and missing
/// credentials so callers can stop before any transcript is fetched.
pub fn build_provider(settings: &Settings) -> Result<Arc<dyn LlmProvider>> {
    let provider = settings.llm.provider.trim().to_ascii_lowercase();

    let summarizer: Arc<dyn LlmProvider> = match provider.as_str() {
        "gemini" => Arc::new(GeminiClient::from_settings(settings)?),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: {}",
            other,
            SUPPORTED_PROVIDERS.join(", ")
        ),
    };

    tracing::debug!(provider = summarizer.name(), "Summarizer configured");
    Ok(summarizer)
}
