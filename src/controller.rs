//! Interaction controller.
//!
//! Reacts to discrete user actions (submit a link, get notes, pick or type a
//! question) and updates the [`SessionState`]. These handlers are the only
//! place external services are called; rendering reads the state through
//! [`crate::view::View`] and never comes through here.

use crate::config::{Prompts, Settings};
use crate::error::{NotesError, Result};
use crate::generator::{ContentGenerator, OpenAIGenerator};
use crate::questions::parse_questions;
use crate::session::{Phase, SelectedQa, SessionState};
use crate::transcript::{TranscriptFetcher, TranscriptProvider, YoutubeTranscriptProvider};
use crate::video::VideoReference;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Drives the URL → transcript → notes → answers pipeline for one session.
pub struct Controller {
    fetcher: TranscriptFetcher,
    generator: Arc<dyn ContentGenerator>,
    prompts: Prompts,
}

impl Controller {
    /// Create a controller with custom components.
    pub fn new(
        provider: Arc<dyn TranscriptProvider>,
        generator: Arc<dyn ContentGenerator>,
        prompts: Prompts,
    ) -> Self {
        Self {
            fetcher: TranscriptFetcher::new(provider),
            generator,
            prompts,
        }
    }

    /// Create a controller backed by YouTube captions and OpenAI.
    ///
    /// Fails when the LLM API key is missing.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.api_key()?;

        let prompts = Prompts::load(
            settings.prompts.custom_dir.as_deref(),
            Some(&settings.prompts.variables),
        )?;

        let provider = Arc::new(YoutubeTranscriptProvider::new(&settings.transcript)?);
        let generator = Arc::new(OpenAIGenerator::new(&api_key, &settings.llm)?);
        info!("Using model {}", generator.model());

        Ok(Self::new(provider, generator, prompts))
    }

    /// Handle a submitted video link.
    ///
    /// Blank input is ignored. An unparseable link clears the current video
    /// and leaves the notes of the previous one untouched.
    pub fn submit_url(&self, state: &mut SessionState, input: &str) -> Result<()> {
        if input.trim().is_empty() {
            return Ok(());
        }

        match VideoReference::from_url(input) {
            Ok(video) => {
                info!("Video selected: {}", video);
                state.video = Some(video);
                state.last_error = None;
                Ok(())
            }
            Err(e) => {
                warn!("{}", e);
                state.video = None;
                Err(record_error(state, e))
            }
        }
    }

    /// Fetch the transcript and generate notes and follow-up questions.
    ///
    /// Makes one transcript request and two generation requests. The session
    /// is only updated once all three succeed.
    #[instrument(skip_all)]
    pub async fn get_notes(&self, state: &mut SessionState) -> Result<()> {
        let result = self.build_notes(state).await;
        match result {
            Ok(notes) => {
                state.transcript = notes.transcript;
                state.summary = Some(notes.summary);
                state.follow_up_questions = notes.questions;
                state.selection = None;
                state.last_error = None;
                Ok(())
            }
            Err(e) => Err(record_error(state, e)),
        }
    }

    async fn build_notes(&self, state: &SessionState) -> Result<Notes> {
        let video = state.video.as_ref().ok_or(NotesError::NoVideo)?;

        info!("Fetching transcript for {}", video);
        let transcript = self.fetcher.fetch(video.id()).await?;
        if transcript.trim().is_empty() {
            return Err(NotesError::TranscriptFetch(format!(
                "transcript for {} has no text",
                video
            )));
        }

        info!("Generating summary");
        let summary = self
            .generator
            .generate(&transcript, &self.prompts.summary_instruction())
            .await?;

        info!("Generating follow-up questions");
        let raw = self
            .generator
            .generate(&summary, &self.prompts.questions_instruction())
            .await?;
        let questions = parse_questions(&raw);
        if questions.is_empty() {
            warn!("No numbered questions found in model output");
        }

        Ok(Notes {
            transcript,
            summary,
            questions,
        })
    }

    /// Answer the follow-up question at `index` (zero-based).
    ///
    /// Answers are not cached; selecting the same question again asks again.
    ///
    /// Notes left over from an earlier video are not answerable once the
    /// current link has been rejected; a valid link must be entered first.
    pub async fn select_question(&self, state: &mut SessionState, index: usize) -> Result<()> {
        match state.phase() {
            Phase::Idle => return Err(record_error(state, NotesError::NoVideo)),
            Phase::HasVideo => return Err(record_error(state, NotesError::NoTranscript)),
            Phase::HasNotes | Phase::HasSelection => {}
        }

        let question = match state.follow_up_questions.get(index) {
            Some(q) => q.clone(),
            None => {
                let err = NotesError::InvalidInput(format!(
                    "no question #{} (have {})",
                    index + 1,
                    state.follow_up_questions.len()
                ));
                return Err(record_error(state, err));
            }
        };

        self.answer(state, question).await
    }

    /// Answer the follow-up question shown as `Q{number}` (one-based).
    pub async fn select_question_number(
        &self,
        state: &mut SessionState,
        number: usize,
    ) -> Result<()> {
        match number.checked_sub(1) {
            Some(index) => self.select_question(state, index).await,
            None => {
                let err = NotesError::InvalidInput(format!(
                    "no question #0 (questions are numbered from 1, have {})",
                    state.follow_up_questions.len()
                ));
                Err(record_error(state, err))
            }
        }
    }

    /// Answer a free-form question about the loaded transcript.
    ///
    /// Blank questions are ignored.
    pub async fn ask_question(&self, state: &mut SessionState, question: &str) -> Result<()> {
        let question = question.trim();
        if question.is_empty() {
            return Ok(());
        }
        if !state.has_transcript() {
            return Err(record_error(state, NotesError::NoTranscript));
        }

        self.answer(state, question.to_string()).await
    }

    #[instrument(skip(self, state))]
    async fn answer(&self, state: &mut SessionState, question: String) -> Result<()> {
        match self.generator.generate(&state.transcript, &question).await {
            Ok(answer) => {
                state.selection = Some(SelectedQa { question, answer });
                state.last_error = None;
                Ok(())
            }
            Err(e) => Err(record_error(state, e)),
        }
    }
}

/// Result of a successful "get notes" action, committed as a whole.
struct Notes {
    transcript: String,
    summary: String,
    questions: Vec<String>,
}

/// Store the user-visible message for `err` and hand the error back.
fn record_error(state: &mut SessionState, err: NotesError) -> NotesError {
    state.last_error = Some(err.to_string());
    err
}
