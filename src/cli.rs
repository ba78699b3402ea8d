//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `genai-demos`.
#[derive(Debug, Parser)]
#[command(name = "genai-demos", version, about = "Text generation demos on a hosted model")]
pub struct Cli {
    /// The Google Cloud project to be used.
    #[arg(long, global = true, env = "GOOGLE_CLOUD_PROJECT", value_name = "PROJECT_ID")]
    pub project: Option<String>,

    /// Log outgoing requests and raw replies to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Serve replies from a recorded cassette instead of calling the service.
    #[arg(long, global = true, value_name = "CASSETTE")]
    pub replay: Option<PathBuf>,

    /// The demo to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported demos.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send a raw prompt and print the full response as JSON.
    Text {
        /// Prompt words, joined with spaces.
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,
    },
    /// Answer a question about Linux.
    LinuxGuru {
        /// Question words, joined with spaces.
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Explain a structured log entry read from standard input.
    LogGuru,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_text_prompt_words() {
        let cli = Cli::parse_from(["genai-demos", "--project", "p", "text", "hello", "world"]);
        assert_eq!(cli.project.as_deref(), Some("p"));
        assert!(matches!(
            cli.command,
            Command::Text { ref prompt } if prompt == &["hello", "world"]
        ));
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli =
            Cli::parse_from(["genai-demos", "linux-guru", "what", "--debug", "--replay", "c.yaml"]);
        assert!(cli.debug);
        assert_eq!(cli.replay.as_deref(), Some(std::path::Path::new("c.yaml")));
    }

    #[test]
    fn linux_guru_requires_a_question() {
        assert!(Cli::try_parse_from(["genai-demos", "linux-guru"]).is_err());
    }

    #[test]
    fn parses_log_guru() {
        let cli = Cli::parse_from(["genai-demos", "log-guru"]);
        assert!(matches!(cli.command, Command::LogGuru));
    }
}
