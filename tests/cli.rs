//! Integration tests for top-level CLI behavior.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde_json::json;

use genai_demos::cassette::recorder::CassetteRecorder;

fn genai() -> Command {
    let bin = env!("CARGO_BIN_EXE_genai-demos");
    let mut cmd = Command::new(bin);
    cmd.env_remove("GENAI_RECORD").env_remove("RUST_LOG").env_remove("GOOGLE_CLOUD_PROJECT");
    cmd
}

fn run_genai(args: &[&str]) -> std::process::Output {
    genai().args(args).output().expect("failed to run genai-demos binary")
}

/// Writes a cassette answering one prediction call with `reply`.
fn cassette(name: &str, reply: &serde_json::Value) -> PathBuf {
    let dir = std::env::temp_dir().join("genai_cli_tests");
    let path = dir.join(format!("{name}.cassette.yaml"));
    let mut recorder = CassetteRecorder::new(&path, name, "text-bison@001");
    recorder.record("prediction", "predict", json!({}), json!({ "Ok": reply.to_string() }));
    recorder.finish().expect("write cassette");
    path
}

fn replay_args<'a>(path: &'a Path, rest: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec!["--project", "demo-project", "--replay", path.to_str().unwrap()];
    args.extend_from_slice(rest);
    args
}

#[test]
fn help_lists_demos() {
    let output = run_genai(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("linux-guru"));
    assert!(stdout.contains("log-guru"));
    assert!(stdout.contains("--project"));
}

#[test]
fn linux_guru_without_question_shows_error() {
    let output = run_genai(&["--project", "p", "linux-guru"]);
    assert!(!output.status.success());
}

#[test]
fn missing_project_is_reported() {
    let output = run_genai(&["text", "hello"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("GOOGLE_CLOUD_PROJECT"));
}

#[test]
fn linux_guru_prints_answer_and_references() {
    let path = cassette(
        "linux_guru_ok",
        &json!({
            "predictions": [{
                "content": "systemd is a system and service manager.",
                "citationMetadata": {"citations": [{"title": "systemd", "url": "https://systemd.io"}]},
                "safetyAttributes": {"blocked": false, "categories": [], "scores": []}
            }]
        }),
    );
    let output = run_genai(&replay_args(&path, &["linux-guru", "What", "is", "systemd?"]));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("generated by AI"));
    assert!(stdout.contains("systemd is a system and service manager."));
    assert!(stdout.contains("References:"));
    assert!(stdout.contains("https://systemd.io"));
}

#[test]
fn blocked_answer_exits_with_error() {
    let path = cassette(
        "linux_guru_blocked",
        &json!({"predictions": [{"content": "", "safetyAttributes": {"blocked": true}}]}),
    );
    let output = run_genai(&replay_args(&path, &["linux-guru", "anything"]));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("blocked"));
}

#[test]
fn text_prints_response_json() {
    let path = cassette(
        "text_ok",
        &json!({
            "predictions": [{"content": "Hello there."}],
            "metadata": {"tokenMetadata": {
                "inputTokenCount": {"totalBillableCharacters": 5, "totalTokens": 2},
                "outputTokenCount": {"totalBillableCharacters": 12, "totalTokens": 3}
            }}
        }),
    );
    let output = run_genai(&replay_args(&path, &["text", "Say", "hello"]));
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let printed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(printed["predictions"][0]["content"], "Hello there.");
    assert_eq!(printed["tokenMetadata"]["inputTokenCount"]["totalBillableCharacters"], 5);
}

#[test]
fn log_guru_reads_stdin() {
    let path = cassette(
        "log_guru_ok",
        &json!({"predictions": [{"content": "The function timed out."}]}),
    );
    let mut child = genai()
        .args(replay_args(&path, &["log-guru"]))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn genai-demos");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"{"severity":"ERROR","textPayload":"Function execution took 60001 ms"}"#)
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "The function timed out.\n");
}

#[test]
fn undecodable_reply_exits_with_error() {
    let path = cassette("text_bad", &json!({"predictions": [{"citationMetadata": {}}]}));
    let output = run_genai(&replay_args(&path, &["text", "hi"]));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("content"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_genai(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
