//! Prompt instructions for tubenotes.
//!
//! The defaults can be replaced by a `prompts.toml` in the custom prompts directory.

use super::Settings;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Instructions prepended to the text handed to the content generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Prompts {
    /// Instruction for turning a transcript into notes.
    pub summary: String,
    /// Instruction for turning the notes into a numbered list of questions.
    pub questions: String,
    /// Custom variables from config, available in all prompts.
    #[serde(skip)]
    pub variables: HashMap<String, String>,
}

impl Default for Prompts {
    fn default() -> Self {
        Self {
            summary: "You are a YouTube video summarizer. Summarize the given transcript into key points within 250 words. Present them pointwise. Provide the summary of the text below: ".to_string(),
            questions: "Based on the following summary, generate 5-6 simple follow-up questions in a numbered list format that users might want to ask to explore the topic further:\n".to_string(),
            variables: HashMap::new(),
        }
    }
}

impl Prompts {
    /// Load prompts, with optional custom directory and variables.
    pub fn load(
        custom_dir: Option<&str>,
        custom_variables: Option<&HashMap<String, String>>,
    ) -> crate::error::Result<Self> {
        let mut prompts = Prompts::default();

        if let Some(dir) = custom_dir {
            let path = Settings::expand_path(dir).join("prompts.toml");
            if path.exists() {
                let content = std::fs::read_to_string(&path)?;
                prompts = toml::from_str(&content)?;
            }
        }

        if let Some(vars) = custom_variables {
            prompts.variables = vars.clone();
        }

        Ok(prompts)
    }

    /// Render a prompt template with the given variables.
    pub fn render(template: &str, vars: &HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{{{}}}}}", key), value);
        }
        result
    }

    /// Summary instruction with custom variables applied.
    pub fn summary_instruction(&self) -> String {
        Self::render(&self.summary, &self.variables)
    }

    /// Question instruction with custom variables applied.
    pub fn questions_instruction(&self) -> String {
        Self::render(&self.questions, &self.variables)
    }
}
