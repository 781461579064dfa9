//! Binary entrypoint for the `task-cli` CLI.

use std::process::ExitCode;

use task_cli::config;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    config::load_dotenv();
    init_tracing();

    match task_cli::run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

/// Logs to stderr only when `TASK_CLI_DEBUG` is set, so stdout stays clean.
fn init_tracing() {
    if std::env::var_os(config::DEBUG_ENV).is_none() {
        return;
    }
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("task_cli=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
