//! Pre-flight checks before talking to external services.
//!
//! A missing API key is fatal at startup, before any command does work.

use crate::config::Settings;
use crate::error::Result;

/// Run pre-flight checks for commands that call the LLM.
///
/// Returns Ok(()) if all checks pass, or an error describing what's missing.
pub fn check(settings: &Settings) -> Result<()> {
    settings.api_key()?;
    if settings.llm.model.trim().is_empty() {
        return Err(crate::error::NotesError::Config(
            "llm.model is empty. Set a model name in the config file.".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotesError;

    #[test]
    fn test_missing_key_fails() {
        let mut settings = Settings::default();
        settings.llm.api_key_env = "TUBENOTES_PREFLIGHT_UNSET_KEY".to_string();
        assert!(matches!(check(&settings), Err(NotesError::Config(_))));
    }
}
