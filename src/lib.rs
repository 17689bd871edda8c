//! tubenotes - YouTube transcripts to notes and Q&A
//!
//! Fetches the transcript of a YouTube video, has an LLM summarize it into
//! notes, proposes follow-up questions, and answers questions from the same
//! transcript.
//!
//! # Architecture
//!
//! - `video` - Video id extraction from links
//! - `transcript` - Transcript providers and the fetcher
//! - `generator` - LLM content generation
//! - `questions` - Follow-up question parsing
//! - `session` - Per-session state record
//! - `controller` - User actions that update the session
//! - `view` - Side-effect free rendering of the session
//! - `cli` - Terminal and HTTP front ends
//!
//! # Example
//!
//! ```rust,no_run
//! use tubenotes::config::Settings;
//! use tubenotes::controller::Controller;
//! use tubenotes::session::SessionState;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let controller = Controller::from_settings(&settings)?;
//!     let mut state = SessionState::new();
//!
//!     controller.submit_url(&mut state, "https://youtube.com/watch?v=dQw4w9WgXcQ")?;
//!     controller.get_notes(&mut state).await?;
//!     println!("{}", state.summary.unwrap_or_default());
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod generator;
pub mod openai;
pub mod questions;
pub mod session;
pub mod transcript;
pub mod video;
pub mod view;

pub use error::{NotesError, Result};
