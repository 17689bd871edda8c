//! Interactive session command.

use crate::cli::Output;
use crate::config::Settings;
use crate::controller::Controller;
use crate::session::SessionState;
use crate::view::View;
use anyhow::Result;
use console::style;
use std::io::{self, BufRead, Write};

/// A line typed at the session prompt.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Url(&'a str),
    Notes,
    Pick(usize),
    Ask(&'a str),
    Show,
    Help,
    Exit,
}

impl<'a> Input<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };

        // Bare keywords are commands; anything longer is a question.
        let input = match (word.to_ascii_lowercase().as_str(), rest.is_empty()) {
            ("exit" | "quit", true) => Input::Exit,
            ("help" | "?", true) => Input::Help,
            ("show", true) => Input::Show,
            ("notes", true) => Input::Notes,
            ("url", false) => Input::Url(rest),
            ("ask", false) => Input::Ask(rest),
            ("url" | "ask", true) => Input::Help,
            _ => match line.parse::<usize>() {
                Ok(n) => Input::Pick(n),
                Err(_) if line.contains("://") => Input::Url(line),
                Err(_) => Input::Ask(line),
            },
        };
        Some(input)
    }
}

fn print_help() {
    Output::kv("url <link>", "select a video");
    Output::kv("notes", "fetch the transcript, write notes and questions");
    Output::kv("<n>", "answer follow-up question n");
    Output::kv("ask <text>", "ask your own question (any other text works too)");
    Output::kv("show", "print the session again");
    Output::kv("exit", "quit");
}

/// Run the interactive session command.
pub async fn run_session(url: Option<String>, settings: Settings) -> Result<()> {
    let controller = Controller::from_settings(&settings)?;
    let mut state = SessionState::new();

    println!("\n{}", style("tubenotes").bold().cyan());
    println!("{}\n", style("Type 'help' for commands, 'exit' to quit.").dim());

    if let Some(url) = url {
        if controller.submit_url(&mut state, &url).is_ok() {
            Output::view(&View::render(&state));
        } else if let Some(e) = &state.last_error {
            Output::error(e);
        }
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", style("tubenotes>").green().bold());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let Some(input) = Input::parse(&line) else {
            continue;
        };

        let result = match input {
            Input::Exit => {
                Output::info("Goodbye!");
                break;
            }
            Input::Help => {
                print_help();
                continue;
            }
            Input::Show => Ok(()),
            Input::Url(url) => controller.submit_url(&mut state, url),
            Input::Notes => {
                let spinner = Output::spinner("Fetching transcript and writing notes...");
                let result = controller.get_notes(&mut state).await;
                spinner.finish_and_clear();
                result
            }
            Input::Pick(n) => {
                let spinner = Output::spinner("Answering question...");
                let result = controller.select_question_number(&mut state, n).await;
                spinner.finish_and_clear();
                result
            }
            Input::Ask(question) => {
                let spinner = Output::spinner("Answering question...");
                let result = controller.ask_question(&mut state, question).await;
                spinner.finish_and_clear();
                result
            }
        };

        // Errors are recorded in the session and shown by the view.
        if let Err(e) = &result {
            tracing::debug!("Action failed: {}", e);
        }
        println!();
        Output::view(&View::render(&state));
        println!();
    }

    Ok(())
}
