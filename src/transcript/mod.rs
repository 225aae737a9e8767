//! Transcript module for ytnotes
//!
//! Fetches timed captions for a video and joins them into plain text,
//! falling back through an ordered list of preferred languages.

mod acquirer;
mod models;
mod service;
mod youtube;

pub use acquirer::{acquire, AcquisitionError};
pub use models::{TranscriptFragment, TranscriptText};
pub use service::{FetchError, TranscriptService};
pub use youtube::YoutubeTranscriptClient;

/// Default language preference order.
pub const DEFAULT_LANGUAGES: &[&str] = &["en", "hi", "es", "fr", "de"];
