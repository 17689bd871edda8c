//! Doctor command - verify configuration and credentials.

use crate::cli::Output;
use crate::config::{Prompts, Settings};
use console::style;
use std::path::Path;

/// Check result for a single item.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.to_string(),
            hint: None,
        }
    }

    fn warning(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn print(&self) {
        let icon = match self.status {
            CheckStatus::Ok => style("✓").green(),
            CheckStatus::Warning => style("!").yellow(),
            CheckStatus::Error => style("✗").red(),
        };

        println!("  {} {} - {}", icon, style(&self.name).bold(), self.message);

        if let Some(hint) = &self.hint {
            println!("    {} {}", style("→").dim(), style(hint).dim());
        }
    }
}

/// Run all diagnostic checks. `config_path` is the file the settings were loaded from.
pub fn run_doctor(settings: &Settings, config_path: &Path) -> anyhow::Result<()> {
    Output::header("tubenotes Doctor");
    println!();

    let checks = vec![
        check_config_file(config_path),
        check_api_key(settings),
        check_prompts(settings),
        check_languages(settings),
    ];

    for check in &checks {
        check.print();
    }
    println!();

    let errors = checks
        .iter()
        .filter(|c| c.status == CheckStatus::Error)
        .count();
    let warnings = checks
        .iter()
        .filter(|c| c.status == CheckStatus::Warning)
        .count();

    if errors > 0 {
        Output::error(&format!("{} problem(s) found", errors));
        anyhow::bail!("doctor found {} problem(s)", errors);
    } else if warnings > 0 {
        Output::warning(&format!("Ready, with {} warning(s)", warnings));
    } else {
        Output::success("All checks passed");
    }

    Ok(())
}

fn check_config_file(path: &Path) -> CheckResult {
    if path.exists() {
        CheckResult::ok("Config", &path.display().to_string())
    } else {
        CheckResult::warning(
            "Config",
            "no config file, using defaults",
            "Run 'tubenotes config init' to create one",
        )
    }
}

fn check_api_key(settings: &Settings) -> CheckResult {
    match settings.api_key() {
        Ok(_) => CheckResult::ok(
            "API key",
            &format!("{} is set (model: {})", settings.llm.api_key_env, settings.llm.model),
        ),
        Err(e) => CheckResult::error(
            "API key",
            &e.to_string(),
            "Notes, answers and the server need an LLM API key",
        ),
    }
}

fn check_prompts(settings: &Settings) -> CheckResult {
    match Prompts::load(
        settings.prompts.custom_dir.as_deref(),
        Some(&settings.prompts.variables),
    ) {
        Ok(_) if settings.prompts.custom_dir.is_some() => {
            CheckResult::ok("Prompts", "custom prompts loaded")
        }
        Ok(_) => CheckResult::ok("Prompts", "built-in prompts"),
        Err(e) => CheckResult::error(
            "Prompts",
            &e.to_string(),
            "Fix prompts.toml in the custom prompts directory",
        ),
    }
}

fn check_languages(settings: &Settings) -> CheckResult {
    if settings.transcript.languages.is_empty() {
        CheckResult::warning(
            "Languages",
            "no transcript languages configured, falling back to 'en'",
            "Set transcript.languages in the config file",
        )
    } else {
        CheckResult::ok("Languages", &settings.transcript.languages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_check_uses_given_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tubenotes.toml");
        assert_eq!(check_config_file(&path).status, CheckStatus::Warning);

        std::fs::write(&path, "").unwrap();
        let result = check_config_file(&path);
        assert_eq!(result.status, CheckStatus::Ok);
        assert_eq!(result.message, path.display().to_string());
    }

    #[test]
    fn test_empty_languages_warns() {
        let mut settings = Settings::default();
        settings.transcript.languages.clear();
        assert_eq!(check_languages(&settings).status, CheckStatus::Warning);
    }

    #[test]
    fn test_missing_key_is_error() {
        let mut settings = Settings::default();
        settings.llm.api_key_env = "TUBENOTES_DOCTOR_UNSET_KEY".to_string();
        let result = check_api_key(&settings);
        assert_eq!(result.status, CheckStatus::Error);
        assert!(result.hint.is_some());
    }
}
