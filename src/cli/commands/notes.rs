//! Notes command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::controller::Controller;
use crate::session::SessionState;
use crate::view::View;
use anyhow::Result;

/// Run the notes command.
pub async fn run_notes(url: &str, answer: Option<usize>, settings: Settings) -> Result<()> {
    let controller = Controller::from_settings(&settings)?;
    let mut state = SessionState::new();

    if let Err(e) = controller.submit_url(&mut state, url) {
        Output::error(&e.to_string());
        return Err(e.into());
    }

    let spinner = Output::spinner("Fetching transcript and writing notes...");
    let result = controller.get_notes(&mut state).await;
    spinner.finish_and_clear();

    if let Err(e) = result {
        Output::error(&e.to_string());
        return Err(e.into());
    }

    if let Some(number) = answer {
        let spinner = Output::spinner("Answering question...");
        let result = controller.select_question_number(&mut state, number).await;
        spinner.finish_and_clear();

        if let Err(e) = result {
            Output::error(&e.to_string());
            return Err(e.into());
        }
    }

    Output::view(&View::render(&state));
    Ok(())
}
