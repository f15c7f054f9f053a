//! Configuration file lookup following the XDG Base Directory search order.
//!
//! A lookup consults a single user directory first and then an ordered list of
//! system directories:
//!
//! 1. `$XDG_CONFIG_HOME`, or `$HOME/.config` when unset.
//! 2. Each absolute entry of the colon-separated `$XDG_CONFIG_DIRS`, or
//!    `/etc/xdg` when unset.
//!
//! Every call reads the current environment and filesystem; nothing is cached.
//!
//! ```rust,no_run
//! if let Some(path) = xdg_locate::locate_config_file("myapp/config.toml") {
//!     println!("using {}", path.display());
//! }
//! ```

mod error;
mod home;
mod locate;
mod search;

pub use error::{LocateError, LocateResult};
pub use home::config_home;
pub use locate::{
    ConfigLocator, locate_all_config_files, locate_config_file, try_locate_config_file,
};
pub use search::config_dirs;

/// Environment variable holding the colon-separated system directory list.
pub const CONFIG_DIRS_VAR: &str = "XDG_CONFIG_DIRS";

/// Environment variable overriding the user configuration directory.
pub const CONFIG_HOME_VAR: &str = "XDG_CONFIG_HOME";

/// Environment variable naming the user's home directory.
pub const HOME_VAR: &str = "HOME";

/// System directory searched when [`CONFIG_DIRS_VAR`] is unset or empty.
pub const DEFAULT_CONFIG_DIR: &str = "/etc/xdg";

/// Suffix appended to [`HOME_VAR`] when [`CONFIG_HOME_VAR`] is unset or empty.
pub const CONFIG_HOME_SUFFIX: &str = "/.config";

/// Reads `key`, treating an empty value the same as an unset one.
fn non_empty_var(key: &str) -> Option<std::ffi::OsString> {
    std::env::var_os(key).filter(|value| !value.is_empty())
}
