//! Video module for ytnotes
//!
//! Resolves user-supplied YouTube links to canonical video identifiers.

mod id;

pub use id::{resolve, VideoId};
