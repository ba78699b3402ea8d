//! Binary entrypoint for the `genai-demos` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env file is fine; flags and the real environment still apply.
    let _ = dotenvy::dotenv();

    // Recording is handled in commands::dispatch via GENAI_RECORD=<file>.
    match genai_demos::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
