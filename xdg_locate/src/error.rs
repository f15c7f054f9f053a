//! Errors surfaced by strict configuration lookups.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while probing configuration candidates.
///
/// Only the strict lookups ([`crate::ConfigLocator::try_locate`] and
/// [`crate::try_locate_config_file`]) return these. The lenient lookups treat
/// every probe failure as "not found".
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LocateError {
    /// Inspecting a candidate failed for a reason other than absence.
    #[error("failed to inspect configuration candidate '{path}': {source}")]
    Probe {
        /// Candidate that could not be inspected.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for strict lookups.
pub type LocateResult<T> = Result<T, LocateError>;
