mod cli;
mod commands;
mod infra;
mod shared;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use commands::search::Outcome;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let Cli { search, verbose } = Cli::parse();
    shared::logging::init(verbose);

    let result = commands::search::run(&search).await;
    exit_code(result, &mut std::io::stderr())
}

/// Map a finished run onto the process exit code, reporting errors on `err`.
fn exit_code(result: anyhow::Result<Outcome>, err: &mut impl Write) -> ExitCode {
    match result {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            let _ = writeln!(err, "Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
