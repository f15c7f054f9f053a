//! CLI entrypoint for `xdg-locate`.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use xdg_locate_cli::cli::Args;
use xdg_locate_cli::error::CliError;
use xdg_locate_cli::logging;
use xdg_locate_cli::run::{self, Outcome};

const EXIT_NOT_FOUND: u8 = 1;
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();
    let is_logging = logging::init(args.verbose).is_ok();
    match execute(&args) {
        Ok(Outcome::Found) => ExitCode::SUCCESS,
        Ok(Outcome::NotFound) => ExitCode::from(EXIT_NOT_FOUND),
        Err(err) => {
            logging::report_failure(&err, is_logging, &mut std::io::stderr());
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn execute(args: &Args) -> Result<Outcome, CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = run::run(args, &mut out)?;
    out.flush()?;
    Ok(outcome)
}
