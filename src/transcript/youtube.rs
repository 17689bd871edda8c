//! YouTube transcript provider.

use super::{TranscriptProvider, TranscriptSegment};
use crate::config::TranscriptSettings;
use crate::error::{NotesError, Result};
use async_trait::async_trait;
use tracing::{info, instrument};
use yt_transcript_rs::api::YouTubeTranscriptApi;

/// Fetches captions published on YouTube.
pub struct YoutubeTranscriptProvider {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
    preserve_formatting: bool,
}

impl YoutubeTranscriptProvider {
    pub fn new(settings: &TranscriptSettings) -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None).map_err(|e| {
            NotesError::TranscriptFetch(format!("Failed to create transcript client: {}", e))
        })?;

        let languages = if settings.languages.is_empty() {
            vec!["en".to_string()]
        } else {
            settings.languages.clone()
        };

        Ok(Self {
            api,
            languages,
            preserve_formatting: settings.preserve_formatting,
        })
    }
}

#[async_trait]
impl TranscriptProvider for YoutubeTranscriptProvider {
    #[instrument(skip(self))]
    async fn fetch_segments(&self, video_id: &str) -> Result<Vec<TranscriptSegment>> {
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();

        let transcript = self
            .api
            .fetch_transcript(video_id, &languages, self.preserve_formatting)
            .await
            .map_err(|e| NotesError::TranscriptFetch(e.to_string()))?;

        info!(
            "Fetched {} transcript ({}, {} snippets)",
            if transcript.is_generated { "generated" } else { "manual" },
            transcript.language_code,
            transcript.snippets.len()
        );

        Ok(transcript
            .snippets
            .into_iter()
            .map(|s| TranscriptSegment::new(s.text, s.start, s.duration))
            .collect())
    }
}
