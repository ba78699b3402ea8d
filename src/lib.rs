//! Core library entry for the `genai-demos` CLI.
//!
//! The reusable part is [`text::TextClient`]: it compiles a prompt from a
//! template, sends it to the hosted `text-bison` model through a
//! [`ports::PredictionService`], and decodes the reply into a typed
//! [`text::Response`].

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod ports;
pub mod text;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version are not failures.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    init_logging(cli.debug);
    commands::dispatch(&cli)
}

/// Installs the stderr log subscriber.
fn init_logging(debug: bool) {
    let filter = log_filter(debug, std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());
    // A subscriber may already be installed when running in-process (tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Builds the log filter from `RUST_LOG`, falling back to `info`.
///
/// `--debug` always enables this crate's debug events on top of the
/// environment's directives.
fn log_filter(debug: bool, env_directives: Option<&str>) -> EnvFilter {
    let default = if debug { "debug" } else { "info" };
    let mut filter = env_directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default));
    if debug {
        if let Ok(directive) = "genai_demos=debug".parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}
