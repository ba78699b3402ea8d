//! `genai-demos log-guru` command.

use std::io::Write;

use tracing::info;

use super::print_answer;
use crate::text::{Parameters, TextClient};

/// Prefix template; the log entry is appended after it.
pub const PROMPT_TEMPLATE: &str = "You summarize and interpret structured log output from Google Cloud Logging.
The answer must be short and objective.

Explain what is happening based on the JSON log below:

";

/// Execute the `log-guru` command on a log entry read from stdin.
///
/// # Errors
///
/// Returns an error string if the input is empty, the call fails, the answer
/// was blocked, or output cannot be written.
pub async fn run(client: &TextClient, log_entry: &str, out: &mut dyn Write) -> Result<(), String> {
    if log_entry.trim().is_empty() {
        return Err("Error: no log entry on standard input".to_string());
    }
    info!(log = %log_entry.trim_end(), "analysing log");

    let response = client
        .generate_text(PROMPT_TEMPLATE, log_entry, &Parameters::DEFAULT)
        .await
        .map_err(|e| format!("Error: generate_text: {e}"))?;

    print_answer(&response, out)
}
