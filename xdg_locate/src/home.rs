//! The user's configuration directory from `XDG_CONFIG_HOME`.

use std::path::PathBuf;

use crate::{CONFIG_HOME_SUFFIX, CONFIG_HOME_VAR, HOME_VAR, non_empty_var};

/// Returns the highest-precedence configuration directory.
///
/// A non-empty `XDG_CONFIG_HOME` is returned verbatim. Otherwise the result is
/// the value of `HOME` followed by `/.config`. An unset `HOME` contributes an
/// empty segment, producing `/.config`.
///
/// # Examples
///
/// ```rust,no_run
/// let dir = xdg_locate::config_home();
/// println!("user configuration lives under {}", dir.display());
/// ```
#[must_use]
pub fn config_home() -> PathBuf {
    non_empty_var(CONFIG_HOME_VAR).map_or_else(default_config_home, PathBuf::from)
}

fn default_config_home() -> PathBuf {
    let mut home = std::env::var_os(HOME_VAR).unwrap_or_default();
    home.push(CONFIG_HOME_SUFFIX);
    PathBuf::from(home)
}
