//! `genai-demos linux-guru` command.

use std::io::Write;

use super::{print_answer, reject_blocked};
use crate::text::{Parameters, TextClient};

/// Template restricting answers to Linux topics.
pub const PROMPT_TEMPLATE: &str = "Context: only answer questions about Linux and GNU/Linux.
For any other question, answer: I don't know about this topic, try another question.

Question: %s
Answer: ";

/// Banner printed before generated content.
pub const DISCLAIMER: &str = "
+--[Notice]--------------------------------------+
| This content was generated by AI.              |
| Review any command before running it.          |
+------------------------------------------------+
";

/// Execute the `linux-guru` command.
///
/// # Errors
///
/// Returns an error string if the call fails, the answer was blocked, or
/// output cannot be written.
pub async fn run(client: &TextClient, question: &str, out: &mut dyn Write) -> Result<(), String> {
    let response = client
        .generate_text(PROMPT_TEMPLATE, question, &Parameters::DEFAULT)
        .await
        .map_err(|e| format!("Error: generate_text: {e}"))?;

    reject_blocked(&response)?;
    writeln!(out, "{DISCLAIMER}").map_err(|e| format!("Error writing output: {e}"))?;
    print_answer(&response, out)
}
