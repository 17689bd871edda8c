//! Transcript fetching.
//!
//! A [`TranscriptProvider`] returns the timed segments of a video; the
//! [`TranscriptFetcher`] turns them into the single string the rest of the
//! pipeline works with.

mod youtube;

pub use youtube::YoutubeTranscriptProvider;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

/// A timed piece of a video transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Spoken text of the segment.
    pub text: String,
    /// Start time in seconds.
    pub start_seconds: f64,
    /// Duration in seconds.
    pub duration_seconds: f64,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>, start_seconds: f64, duration_seconds: f64) -> Self {
        Self {
            text: text.into(),
            start_seconds,
            duration_seconds,
        }
    }
}

/// Trait for transcript providers.
#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    /// Fetch every timed segment of the video, in playback order.
    async fn fetch_segments(&self, video_id: &str) -> Result<Vec<TranscriptSegment>>;
}

/// Join segment texts in order, each preceded by a single space.
pub fn join_segments(segments: &[TranscriptSegment]) -> String {
    segments.iter().fold(String::new(), |mut acc, segment| {
        acc.push(' ');
        acc.push_str(&segment.text);
        acc
    })
}

/// Fetches a transcript as one concatenated string.
#[derive(Clone)]
pub struct TranscriptFetcher {
    provider: Arc<dyn TranscriptProvider>,
}

impl TranscriptFetcher {
    pub fn new(provider: Arc<dyn TranscriptProvider>) -> Self {
        Self { provider }
    }

    /// Fetch the full transcript for `video_id`. All-or-nothing.
    #[instrument(skip(self))]
    pub async fn fetch(&self, video_id: &str) -> Result<String> {
        let segments = self.provider.fetch_segments(video_id).await?;
        debug!("Fetched {} transcript segments", segments.len());
        Ok(join_segments(&segments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotesError;

    struct StaticProvider(Vec<TranscriptSegment>);

    #[async_trait]
    impl TranscriptProvider for StaticProvider {
        async fn fetch_segments(&self, _video_id: &str) -> Result<Vec<TranscriptSegment>> {
            Ok(self.0.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl TranscriptProvider for FailingProvider {
        async fn fetch_segments(&self, video_id: &str) -> Result<Vec<TranscriptSegment>> {
            Err(NotesError::TranscriptFetch(format!(
                "Transcripts are disabled for {}",
                video_id
            )))
        }
    }

    #[test]
    fn test_join_segments() {
        let segments = vec![
            TranscriptSegment::new("a", 0.0, 1.5),
            TranscriptSegment::new("b", 1.5, 2.0),
        ];
        assert_eq!(join_segments(&segments), " a b");
        assert_eq!(join_segments(&[]), "");
    }

    #[tokio::test]
    async fn test_fetch_joins_in_order() {
        let fetcher = TranscriptFetcher::new(Arc::new(StaticProvider(vec![
            TranscriptSegment::new("hello", 0.0, 1.0),
            TranscriptSegment::new("there", 1.0, 1.0),
            TranscriptSegment::new("world", 2.0, 1.0),
        ])));

        assert_eq!(fetcher.fetch("abc123").await.unwrap(), " hello there world");
        // Same provider response, same transcript.
        assert_eq!(fetcher.fetch("abc123").await.unwrap(), " hello there world");
    }

    #[tokio::test]
    async fn test_fetch_propagates_provider_error() {
        let fetcher = TranscriptFetcher::new(Arc::new(FailingProvider));
        let err = fetcher.fetch("abc123").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Transcript extraction failed: Transcripts are disabled for abc123"
        );
    }
}
