//! Ask command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::controller::Controller;
use crate::session::SessionState;
use anyhow::Result;

/// Run the ask command.
///
/// Needs the transcript, so this runs the full notes step before answering.
pub async fn run_ask(url: &str, question: &str, settings: Settings) -> Result<()> {
    let controller = Controller::from_settings(&settings)?;
    let mut state = SessionState::new();

    controller.submit_url(&mut state, url).inspect_err(|e| {
        Output::error(&e.to_string());
    })?;

    let spinner = Output::spinner("Fetching transcript...");
    let result = controller.get_notes(&mut state).await;
    spinner.finish_and_clear();
    result.inspect_err(|e| Output::error(&e.to_string()))?;

    let spinner = Output::spinner("Answering question...");
    let result = controller.ask_question(&mut state, question).await;
    spinner.finish_and_clear();

    match result {
        Ok(()) => {
            if let Some(selection) = &state.selection {
                println!("\n{}\n", selection.answer.trim());
            }
            Ok(())
        }
        Err(e) => {
            Output::error(&format!("Failed to generate answer: {}", e));
            Err(e.into())
        }
    }
}
