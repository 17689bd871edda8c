//! CLI module for tubenotes.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// tubenotes - YouTube transcripts to notes and Q&A
///
/// Fetches the transcript of a YouTube video, summarizes it into notes,
/// suggests follow-up questions and answers them from the transcript.
#[derive(Parser, Debug)]
#[command(name = "tubenotes")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get notes and follow-up questions for a video
    Notes {
        /// YouTube video link (e.g. https://youtube.com/watch?v=...)
        url: String,

        /// Also answer the follow-up question with this number
        #[arg(short, long)]
        answer: Option<usize>,
    },

    /// Ask a question about a video's transcript
    Ask {
        /// YouTube video link
        url: String,

        /// The question to ask
        question: String,
    },

    /// Start an interactive session
    Session {
        /// Video link to start with
        url: Option<String>,
    },

    /// Start HTTP server exposing a single session
    Serve {
        /// Host to bind to (defaults to server.host from config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (defaults to server.port from config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration and API key
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

impl Commands {
    /// Whether the command talks to the LLM and therefore needs an API key.
    pub fn needs_llm(&self) -> bool {
        matches!(
            self,
            Commands::Notes { .. }
                | Commands::Ask { .. }
                | Commands::Session { .. }
                | Commands::Serve { .. }
        )
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Write the default configuration file if none exists
    Init,

    /// Show configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_notes() {
        let cli = Cli::parse_from([
            "tubenotes",
            "-vv",
            "notes",
            "https://youtube.com/watch?v=abc123",
            "--answer",
            "2",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Notes { url, answer } => {
                assert_eq!(url, "https://youtube.com/watch?v=abc123");
                assert_eq!(answer, Some(2));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_needs_llm() {
        let cli = Cli::parse_from(["tubenotes", "doctor"]);
        assert!(!cli.command.needs_llm());

        let cli = Cli::parse_from(["tubenotes", "session"]);
        assert!(cli.command.needs_llm());
    }
}
