//! Configuration module for tubenotes.
//!
//! Handles loading application settings and prompt instructions.

mod prompts;
mod settings;

pub use prompts::Prompts;
pub use settings::{LlmSettings, PromptSettings, ServerSettings, Settings, TranscriptSettings};
