//! Video identifier extraction

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Length of a canonical YouTube video identifier.
pub const VIDEO_ID_LEN: usize = 11;

const THUMBNAIL_BASE: &str = "https://i.ytimg.com/vi";
const WATCH_BASE: &str = "https://www.youtube.com/watch?v=";

/// Recognizes every supported link form in one pass:
/// `watch?v=ID` (v may follow other query params), `youtu.be/ID`, `embed/ID`
/// and `v/ID`, with optional scheme and `www.`/`m.` prefix. The identifier
/// must be followed by end of input or a delimiter, so 10- or 12-character
/// tokens never match.
static VIDEO_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?i:https?://)?(?i:(?:www|m)\.)?(?:(?i:youtube\.com)/(?:watch\?(?:[^#\s]*&)?v=|embed/|v/)|(?i:youtu\.be)/)([A-Za-z0-9_-]{11})(?:[?&#/]|$)",
    )
    .expect("video URL pattern is valid")
});

static BARE_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("video id pattern is valid"));

/// Canonical 11-character video identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Validate a bare identifier such as `dQw4w9WgXcQ`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        BARE_ID_PATTERN
            .is_match(raw)
            .then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Preview image shown next to the form.
    pub fn thumbnail_url(&self) -> String {
        format!("{}/{}/0.jpg", THUMBNAIL_BASE, self.0)
    }

    pub fn watch_url(&self) -> String {
        format!("{}{}", WATCH_BASE, self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extract the video identifier from a YouTube link.
///
/// Returns `None` for anything that is not one of the recognized link forms;
/// no partial or guessed identifier is ever produced.
pub fn resolve(url: &str) -> Option<VideoId> {
    let caps = VIDEO_URL_PATTERN.captures(url.trim())?;
    let id = caps.get(1)?.as_str();
    debug_assert_eq!(id.len(), VIDEO_ID_LEN);
    Some(VideoId(id.to_string()))
}
