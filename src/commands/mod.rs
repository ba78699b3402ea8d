//! Command dispatch and handlers.

pub mod linux_guru;
pub mod log_guru;
pub mod text;

use std::env;
use std::io::{self, Read, Write};
use std::path::Path;

use tracing::warn;

use crate::cli::{Cli, Command};
use crate::context::ServiceContext;
use crate::text::{ClientConfig, Response};

/// Environment variable naming a cassette file to record the run into.
pub const RECORD_ENV: &str = "GENAI_RECORD";

/// Dispatch a parsed command line to its handler.
///
/// `--replay` serves replies from a cassette. Otherwise, when `GENAI_RECORD`
/// is set to a file path, the live call is recorded into that cassette.
///
/// # Errors
///
/// Returns an error string if configuration is missing or the selected
/// command fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let project = cli
        .project
        .clone()
        .filter(|p| !p.is_empty())
        .ok_or("no project id: pass --project or set GOOGLE_CLOUD_PROJECT")?;

    let ctx = if let Some(path) = &cli.replay {
        ServiceContext::replaying(path)?
    } else if let Ok(path) = env::var(RECORD_ENV) {
        ServiceContext::recording(Path::new(&path))
    } else {
        ServiceContext::live()
    };

    let mut client = ctx.text_client(ClientConfig::new(project));
    client.set_debug(cli.debug);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start runtime: {e}"))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    runtime.block_on(async {
        match &cli.command {
            Command::Text { prompt } => text::run(&client, &prompt.join(" "), &mut out).await,
            Command::LinuxGuru { question } => {
                linux_guru::run(&client, &question.join(" "), &mut out).await
            }
            Command::LogGuru => {
                let mut input = String::new();
                io::stdin().read_to_string(&mut input).map_err(|e| format!("Error: {e}"))?;
                log_guru::run(&client, &input, &mut out).await
            }
        }
    })
}

/// Fails when the top prediction was blocked by the provider's safety filters.
pub(crate) fn reject_blocked(response: &Response) -> Result<(), String> {
    match response.first() {
        Some(p) if p.safety_attributes.blocked => {
            warn!(details = ?p.safety_attributes, "response blocked");
            Err("This response was blocked.".to_string())
        }
        _ => Ok(()),
    }
}

/// Prints the top prediction's content followed by its references.
///
/// # Errors
///
/// Returns an error if there is no prediction, the prediction was blocked,
/// or writing fails.
pub(crate) fn print_answer(response: &Response, out: &mut dyn Write) -> Result<(), String> {
    reject_blocked(response)?;
    let generated = response.first().ok_or("Error: the model returned no predictions")?;

    let write_err = |e: io::Error| format!("Error writing output: {e}");
    writeln!(out, "{}", generated.content).map_err(write_err)?;

    let citations = &generated.citation_metadata.citations;
    if !citations.is_empty() {
        writeln!(out, "\nReferences:").map_err(write_err)?;
        for citation in citations {
            writeln!(out, "{}  {}", citation.title, citation.url).map_err(write_err)?;
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use chrono::Utc;
    use serde_json::json;

    use crate::adapters::replaying::ReplayingPredictionService;
    use crate::cassette::format::{Cassette, Interaction};
    use crate::cassette::replayer::CassetteReplayer;
    use crate::text::{ClientConfig, TextClient};

    /// A client whose single call is answered with `body`.
    pub(crate) fn client_replying(body: &str) -> TextClient {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            model: "text-bison@001".into(),
            interactions: vec![Interaction {
                seq: 0,
                port: "prediction".into(),
                method: "predict".into(),
                input: json!({}),
                output: json!({ "Ok": body }),
            }],
        };
        let service = ReplayingPredictionService::new(CassetteReplayer::new(&cassette));
        TextClient::new(ClientConfig::new("demo"), Arc::new(service))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(body: &str) -> Response {
        Response::decode(body).unwrap()
    }

    #[test]
    fn prints_content_and_references() {
        let r = response(
            r#"{"predictions":[{"content":"Use ls.","citationMetadata":{"citations":[{"title":"ls(1)","url":"https://man7.org/ls"}]}}]}"#,
        );
        let mut out = Vec::new();
        print_answer(&r, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Use ls.\n\nReferences:\nls(1)  https://man7.org/ls\n"
        );
    }

    #[test]
    fn omits_references_header_without_citations() {
        let r = response(r#"{"predictions":[{"content":"Plain."}]}"#);
        let mut out = Vec::new();
        print_answer(&r, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Plain.\n");
    }

    #[test]
    fn blocked_answer_is_rejected() {
        let r = response(r#"{"predictions":[{"content":"","safetyAttributes":{"blocked":true}}]}"#);
        let mut out = Vec::new();
        let err = print_answer(&r, &mut out).unwrap_err();
        assert!(err.contains("blocked"));
        assert!(out.is_empty());
    }

    #[test]
    fn empty_response_is_an_error() {
        let mut out = Vec::new();
        assert!(print_answer(&response("{}"), &mut out).is_err());
    }
}
