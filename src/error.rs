//! Error types for tubenotes.

use thiserror::Error;

/// Library-level error type for tubenotes operations.
#[derive(Error, Debug)]
pub enum NotesError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),

    #[error("No video selected. Enter a YouTube link first.")]
    NoVideo,

    #[error("No transcript loaded. Get the notes for a video first.")]
    NoTranscript,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Transcript extraction failed: {0}")]
    TranscriptFetch(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl NotesError {
    /// True for errors caused by what the user typed or clicked, as opposed
    /// to failures of the transcript provider or the LLM.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            NotesError::InvalidUrl(_)
                | NotesError::NoVideo
                | NotesError::NoTranscript
                | NotesError::InvalidInput(_)
        )
    }
}

/// Result type alias for tubenotes operations.
pub type Result<T> = std::result::Result<T, NotesError>;
