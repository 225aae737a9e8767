//! Notes module for ytnotes
//!
//! Runs a link through resolution, transcript acquisition and summarization.

mod pipeline;

pub use pipeline::{fetch_transcript, NotesPipeline, VideoNotes};
