//! CLI output formatting utilities.

use crate::view::View;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    /// Print an info message.
    pub fn info(msg: &str) {
        println!("{} {}", style(">>").cyan().bold(), msg);
    }

    /// Print a success message.
    pub fn success(msg: &str) {
        println!("{} {}", style(">>").green().bold(), msg);
    }

    /// Print a warning message.
    pub fn warning(msg: &str) {
        eprintln!("{} {}", style(">>").yellow().bold(), msg);
    }

    /// Print an error message.
    pub fn error(msg: &str) {
        eprintln!("{} {}", style(">>").red().bold(), msg);
    }

    /// Print a header.
    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a key-value pair.
    pub fn kv(key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(msg: &str) {
        println!("  {} {}", style("*").cyan(), msg);
    }

    /// Create a spinner.
    pub fn spinner(msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Print the rendered session.
    pub fn view(view: &View) {
        if let Some(id) = &view.video_id {
            Output::kv("Video", id);
        }
        if let Some(thumb) = &view.thumbnail_url {
            Output::kv("Thumbnail", thumb);
        }

        if let Some(summary) = &view.summary {
            Output::header("Summary");
            println!("{}", summary.trim());
        }

        if !view.questions.is_empty() {
            Output::header("Follow-Up Questions");
            for q in &view.questions {
                Output::list_item(&q.label);
            }
        }

        if let (Some(question), Some(answer)) = (&view.selected_question, &view.selected_answer) {
            println!("\n{}", style(question).bold().cyan());
            println!("{}", answer.trim());
        }

        if let Some(error) = &view.error {
            println!();
            Output::error(error);
        }
    }
}
