//! Error types for `xdg-locate`.

use thiserror::Error;

/// Errors surfaced by the `xdg-locate` command.
#[derive(Debug, Error)]
pub enum CliError {
    /// A strict lookup could not inspect a candidate.
    #[error(transparent)]
    Locate(#[from] xdg_locate::LocateError),

    /// A lookup mode was selected without a file name.
    #[error("a file name is required unless --home or --dirs is given")]
    MissingName,

    /// Writing results to stdout failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
