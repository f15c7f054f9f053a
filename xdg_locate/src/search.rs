//! System-wide configuration directories from `XDG_CONFIG_DIRS`.

use std::ffi::OsStr;
use std::path::PathBuf;

use crate::{CONFIG_DIRS_VAR, DEFAULT_CONFIG_DIR, non_empty_var};

/// Returns the system configuration directories in precedence order.
///
/// The value of `XDG_CONFIG_DIRS` is split on `:` and only entries starting
/// with `/` are kept. Empty and relative entries are dropped rather than
/// replaced, so a value made up solely of relative entries yields an empty
/// list. Duplicates are preserved.
///
/// When the variable is unset or empty the list is `["/etc/xdg"]`.
///
/// # Examples
///
/// ```rust,no_run
/// for dir in xdg_locate::config_dirs() {
///     println!("{}", dir.display());
/// }
/// ```
#[must_use]
pub fn config_dirs() -> Vec<PathBuf> {
    non_empty_var(CONFIG_DIRS_VAR).map_or_else(
        || vec![PathBuf::from(DEFAULT_CONFIG_DIR)],
        |value| parse_dir_list(&value),
    )
}

pub(crate) fn parse_dir_list(value: &OsStr) -> Vec<PathBuf> {
    split_entries(value)
        .into_iter()
        .filter(|entry| {
            let is_absolute = starts_with_slash(entry);
            if !is_absolute && !entry.is_empty() {
                tracing::debug!(
                    entry = %entry.to_string_lossy(),
                    "ignoring relative {CONFIG_DIRS_VAR} entry"
                );
            }
            is_absolute
        })
        .map(PathBuf::from)
        .collect()
}

#[cfg(unix)]
fn split_entries(value: &OsStr) -> Vec<&OsStr> {
    use std::os::unix::ffi::OsStrExt;

    value
        .as_bytes()
        .split(|byte| *byte == b':')
        .map(OsStr::from_bytes)
        .collect()
}

#[cfg(not(unix))]
fn split_entries(value: &OsStr) -> Vec<std::ffi::OsString> {
    value
        .to_string_lossy()
        .split(':')
        .map(std::ffi::OsString::from)
        .collect()
}

fn starts_with_slash(entry: &OsStr) -> bool {
    entry.as_encoded_bytes().first() == Some(&b'/')
}
