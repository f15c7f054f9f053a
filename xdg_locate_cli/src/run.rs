//! Dispatches a parsed invocation onto the lookup library.

use std::io::Write;
use std::path::Path;

use xdg_locate::{ConfigLocator, config_dirs, config_home};

use crate::cli::{Args, Mode};
use crate::error::CliError;

/// Whether a lookup produced any output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// At least one path was printed.
    Found,
    /// The lookup completed without a match.
    NotFound,
}

/// Runs the invocation described by `args`, writing paths to `out`.
///
/// # Errors
///
/// Returns [`CliError::MissingName`] when a lookup has no name,
/// [`CliError::Locate`] when a strict lookup fails and [`CliError::Output`]
/// when writing to `out` fails.
pub fn run(args: &Args, out: &mut impl Write) -> Result<Outcome, CliError> {
    let mode = args.mode().ok_or(CliError::MissingName)?;
    let locator = args
        .prefix
        .as_ref()
        .map_or_else(ConfigLocator::new, |prefix| {
            ConfigLocator::with_prefix(prefix.as_std_path())
        });
    tracing::debug!(?mode, prefix = ?locator.prefix(), "running lookup");

    match mode {
        Mode::Home => {
            write_paths(out, [config_home()])?;
            Ok(Outcome::Found)
        }
        Mode::Dirs => write_paths(out, config_dirs()),
        Mode::Candidates(name) => write_paths(out, locator.candidates(name)),
        Mode::All(name) => write_paths(out, locator.locate_all(name)),
        Mode::First { name, is_strict } => {
            let found = if is_strict {
                locator.try_locate(&name)?
            } else {
                locator.locate(&name)
            };
            if found.is_none() {
                tracing::info!(%name, "no configuration file found");
            }
            write_paths(out, found)
        }
    }
}

fn write_paths<I, P>(out: &mut impl Write, paths: I) -> Result<Outcome, CliError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut outcome = Outcome::NotFound;
    for path in paths {
        writeln!(out, "{}", path.as_ref().display())?;
        outcome = Outcome::Found;
    }
    Ok(outcome)
}
