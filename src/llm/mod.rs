//! LLM module for ytnotes
//!
//! Turns transcripts into bullet-point notes using the Gemini API.

mod client;
mod gemini;
mod prompts;

pub use client::{build_provider, LlmProvider, SummaryRequest, SUPPORTED_PROVIDERS};
pub use gemini::GeminiClient;
pub use prompts::{build_summary_prompt, SUMMARY_INSTRUCTIONS};
