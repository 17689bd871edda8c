//! Side-effect free rendering of the session.
//!
//! Presentation layers may call [`View::render`] as often as they like; it
//! only reads the state.

use crate::session::{Phase, SessionState};
use serde::Serialize;

/// A follow-up question as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionItem {
    /// Zero-based index to pass back when the question is picked.
    pub index: usize,
    /// Display label, e.g. `Q1: What is X?`.
    pub label: String,
    pub question: String,
}

/// Everything a presentation layer needs to draw the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub phase: Phase,
    pub video_id: Option<String>,
    pub thumbnail_url: Option<String>,
    pub summary: Option<String>,
    pub questions: Vec<QuestionItem>,
    pub selected_question: Option<String>,
    pub selected_answer: Option<String>,
    /// Whether a free-form question can be asked.
    pub can_ask: bool,
    pub error: Option<String>,
}

impl View {
    /// Build the view for `state`.
    pub fn render(state: &SessionState) -> Self {
        let questions = state
            .follow_up_questions
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionItem {
                index,
                label: format!("Q{}: {}", index + 1, question.trim()),
                question: question.clone(),
            })
            .collect();

        Self {
            phase: state.phase(),
            video_id: state.video.as_ref().map(|v| v.id().to_string()),
            thumbnail_url: state.video.as_ref().map(|v| v.thumbnail_url()),
            summary: state.summary.clone(),
            questions,
            selected_question: state.selection.as_ref().map(|s| s.question.clone()),
            selected_answer: state.selection.as_ref().map(|s| s.answer.clone()),
            can_ask: state.has_transcript(),
            error: state.last_error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SelectedQa;
    use crate::video::VideoReference;

    #[test]
    fn test_render_idle() {
        let view = View::render(&SessionState::new());
        assert_eq!(view.phase, Phase::Idle);
        assert!(view.thumbnail_url.is_none());
        assert!(view.questions.is_empty());
        assert!(!view.can_ask);
    }

    #[test]
    fn test_render_with_selection() {
        let mut state = SessionState::new();
        state.video = Some(VideoReference::from_url("https://youtube.com/watch?v=abc123").unwrap());
        state.transcript = " hi".to_string();
        state.summary = Some("- point".to_string());
        state.follow_up_questions = vec!["What is X? ".to_string(), "Why Y?".to_string()];
        state.selection = Some(SelectedQa {
            question: "Why Y?".to_string(),
            answer: "Because.".to_string(),
        });

        let view = View::render(&state);
        assert_eq!(view.phase, Phase::HasSelection);
        assert_eq!(
            view.thumbnail_url.as_deref(),
            Some("http://img.youtube.com/vi/abc123/0.jpg")
        );
        assert_eq!(view.questions[0].label, "Q1: What is X?");
        assert_eq!(view.questions[1].label, "Q2: Why Y?");
        assert_eq!(view.selected_answer.as_deref(), Some("Because."));
        assert!(view.can_ask);
    }

    #[test]
    fn test_render_does_not_touch_state() {
        let mut state = SessionState::new();
        state.last_error = Some("Generation failed: quota".to_string());
        let before = state.clone();

        let first = View::render(&state);
        let second = View::render(&state);
        assert_eq!(first, second);
        assert_eq!(state, before);
    }
}
