//! `genai-demos text` command.

use std::io::Write;

use tracing::info;

use super::reject_blocked;
use crate::text::{Parameters, TextClient};

/// Execute the `text` command.
///
/// Sends the prompt as-is with the default parameters and prints the whole
/// response as indented JSON.
///
/// # Errors
///
/// Returns an error string if the call fails, the response was blocked, or
/// output cannot be written.
pub async fn run(client: &TextClient, prompt: &str, out: &mut dyn Write) -> Result<(), String> {
    let params = Parameters::DEFAULT;
    info!(prompt = ?prompt, "prompt");
    info!(params = ?params, "params");

    let response = client
        .generate_text("%s", prompt, &params)
        .await
        .map_err(|e| format!("error invoking generate_text: {e}"))?;

    writeln!(out, "{response}").map_err(|e| format!("error formatting the output: {e}"))?;
    reject_blocked(&response)
}
