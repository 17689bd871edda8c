//! YouTube video references parsed from user-supplied links.

use crate::error::{NotesError, Result};
use serde::{Deserialize, Serialize};

/// Identifier of the video the session is working on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoReference {
    id: String,
}

impl VideoReference {
    /// Extract the video id from a link such as `https://youtube.com/watch?v=abc123`.
    ///
    /// The id is the value of the first `=`-delimited query parameter, cut at
    /// the next `&`, `#` or `=`.
    pub fn from_url(input: &str) -> Result<Self> {
        let input = input.trim();

        let (_, rest) = input
            .split_once('=')
            .ok_or_else(|| NotesError::InvalidUrl(format!("no video id in '{}'", input)))?;

        let id = rest
            .split(['&', '#', '='])
            .next()
            .unwrap_or_default()
            .trim();

        if id.is_empty() {
            return Err(NotesError::InvalidUrl(format!(
                "empty video id in '{}'",
                input
            )));
        }

        Ok(Self { id: id.to_string() })
    }

    /// The bare video id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Thumbnail image for the video.
    pub fn thumbnail_url(&self) -> String {
        format!("http://img.youtube.com/vi/{}/0.jpg", self.id)
    }

    /// Canonical watch page for the video.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }
}

impl std::fmt::Display for VideoReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_video_id() {
        let video = VideoReference::from_url("https://youtube.com/watch?v=abc123").unwrap();
        assert_eq!(video.id(), "abc123");

        let video =
            VideoReference::from_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s").unwrap();
        assert_eq!(video.id(), "dQw4w9WgXcQ");

        let video = VideoReference::from_url("  https://youtube.com/watch?v=xyz  ").unwrap();
        assert_eq!(video.id(), "xyz");
    }

    #[test]
    fn test_invalid_urls() {
        assert!(matches!(
            VideoReference::from_url("https://youtu.be/dQw4w9WgXcQ"),
            Err(NotesError::InvalidUrl(_))
        ));
        assert!(matches!(
            VideoReference::from_url("https://youtube.com/watch?v="),
            Err(NotesError::InvalidUrl(_))
        ));
        assert!(VideoReference::from_url("").is_err());
    }

    #[test]
    fn test_thumbnail_url() {
        let video = VideoReference::from_url("https://youtube.com/watch?v=abc123").unwrap();
        assert_eq!(video.thumbnail_url(), "http://img.youtube.com/vi/abc123/0.jpg");
        assert_eq!(video.watch_url(), "https://www.youtube.com/watch?v=abc123");
    }

    #[test]
    fn test_serializes_as_plain_id() {
        let video = VideoReference::from_url("https://youtube.com/watch?v=abc123").unwrap();
        assert_eq!(serde_json::to_string(&video).unwrap(), "\"abc123\"");
    }
}
