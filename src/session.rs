//! Session state for one user working through one video at a time.

use crate::video::VideoReference;
use serde::{Deserialize, Serialize};

/// A question and the answer generated for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedQa {
    pub question: String,
    pub answer: String,
}

/// Where the session is in the URL → notes → answers flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    HasVideo,
    HasNotes,
    HasSelection,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::HasVideo => write!(f, "has_video"),
            Phase::HasNotes => write!(f, "has_notes"),
            Phase::HasSelection => write!(f, "has_selection"),
        }
    }
}

/// Everything the session knows. Only the controller mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Video the user entered.
    pub video: Option<VideoReference>,
    /// Concatenated transcript of the last successful fetch.
    pub transcript: String,
    /// Notes generated from the transcript.
    pub summary: Option<String>,
    /// Questions generated from the notes.
    pub follow_up_questions: Vec<String>,
    /// Last answered question.
    pub selection: Option<SelectedQa>,
    /// Message of the last failed action, cleared by the next successful one.
    pub last_error: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase, derived from which fields are set.
    pub fn phase(&self) -> Phase {
        if self.video.is_none() {
            Phase::Idle
        } else if !self.has_notes() {
            Phase::HasVideo
        } else if self.selection.is_none() {
            Phase::HasNotes
        } else {
            Phase::HasSelection
        }
    }

    pub fn has_transcript(&self) -> bool {
        !self.transcript.is_empty()
    }

    pub fn has_notes(&self) -> bool {
        self.summary.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_progression() {
        let mut state = SessionState::new();
        assert_eq!(state.phase(), Phase::Idle);

        state.video = Some(VideoReference::from_url("https://youtube.com/watch?v=abc").unwrap());
        assert_eq!(state.phase(), Phase::HasVideo);

        state.transcript = " hello".to_string();
        state.summary = Some("notes".to_string());
        assert_eq!(state.phase(), Phase::HasNotes);

        state.selection = Some(SelectedQa {
            question: "Why?".to_string(),
            answer: "Because.".to_string(),
        });
        assert_eq!(state.phase(), Phase::HasSelection);
        assert!(state.phase() > Phase::HasNotes);
    }

    #[test]
    fn test_state_is_serializable() {
        let mut state = SessionState::new();
        state.video = Some(VideoReference::from_url("https://youtube.com/watch?v=abc").unwrap());
        state.follow_up_questions = vec!["What?".to_string()];

        let json = serde_json::to_string(&state).unwrap();
        let restored: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
