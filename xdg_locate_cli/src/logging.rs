//! Diagnostic logging for the command-line front end.

use std::io::Write;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::error::CliError;

/// Maps the `-v` count onto a default filter directive.
#[must_use]
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs a stderr subscriber, preferring `RUST_LOG` when it is set.
///
/// # Errors
///
/// Returns the subscriber error when a global subscriber or `log` logger is
/// already set. The command keeps running without its own subscriber then.
pub fn init(verbosity: u8) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .finish()
        .try_init()
}

/// Reports a failed run.
///
/// Errors go through `tracing` when [`init`] succeeded, and are written to
/// `fallback` as `xdg-locate: <error>` otherwise so they are never lost.
pub fn report_failure(err: &CliError, is_logging: bool, fallback: &mut impl Write) {
    if is_logging {
        tracing::error!(error = %err, "xdg-locate failed");
    } else {
        // Best-effort; stderr is the last channel available.
        let _unused = writeln!(fallback, "xdg-locate: {err}");
    }
}
