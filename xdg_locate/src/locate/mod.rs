//! Candidate construction and existence probing for configuration lookups.
//!
//! [`ConfigLocator`] joins a file name onto the home configuration directory
//! and then onto each system directory, probing the results in that order.

use std::ffi::OsStr;
use std::io;
use std::path::{Component, Path, PathBuf};

use camino::Utf8PathBuf;

use crate::{LocateError, LocateResult, config_dirs, config_home};

/// Searches the XDG configuration directories for named files.
///
/// # Examples
///
/// ```rust,no_run
/// use xdg_locate::ConfigLocator;
///
/// let locator = ConfigLocator::with_prefix("myapp");
/// // Probes `$XDG_CONFIG_HOME/myapp/config.toml`, then
/// // `<dir>/myapp/config.toml` for each `$XDG_CONFIG_DIRS` entry.
/// if let Some(path) = locator.locate("config.toml") {
///     println!("found {}", path.display());
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLocator {
    prefix: Option<PathBuf>,
}

/// Outcome of probing a single candidate.
enum Probe {
    Found,
    Missing,
    Failed(io::Error),
}

impl ConfigLocator {
    /// Creates a locator that joins names directly onto each search directory.
    #[must_use]
    pub const fn new() -> Self {
        Self { prefix: None }
    }

    /// Creates a locator that searches `<dir>/<prefix>/<name>` instead.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<PathBuf>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    /// Returns the application prefix, if one was configured.
    #[must_use]
    pub fn prefix(&self) -> Option<&Path> {
        self.prefix.as_deref()
    }

    /// Returns every candidate path for `name` in precedence order.
    ///
    /// The home configuration directory comes first, followed by the system
    /// directories in the order given by `XDG_CONFIG_DIRS`. The filesystem is
    /// not consulted.
    ///
    /// `name` (after the prefix, if any) is always joined beneath each
    /// directory: a leading `/` does not escape the search directory. The
    /// joined path is then cleaned lexically, so `.` components vanish and
    /// `..` removes the preceding component, stopping at the root.
    #[must_use]
    pub fn candidates(&self, name: impl AsRef<Path>) -> Vec<PathBuf> {
        let relative = self.relative_name(name.as_ref());
        let candidates: Vec<PathBuf> = std::iter::once(config_home())
            .chain(config_dirs())
            .map(|dir| join_relative(&dir, &relative))
            .collect();
        tracing::trace!(?candidates, "resolved configuration candidates");
        candidates
    }

    /// Returns the candidates for `name` that are valid UTF-8.
    ///
    /// Paths that cannot be represented as UTF-8 are omitted.
    #[must_use]
    pub fn utf8_candidates(&self, name: impl AsRef<Path>) -> Vec<Utf8PathBuf> {
        self.candidates(name)
            .into_iter()
            .filter_map(|path| Utf8PathBuf::from_path_buf(path).ok())
            .collect()
    }

    /// Returns the first existing candidate for `name`.
    ///
    /// Files, directories and any other entry type count as a match. Probe
    /// failures such as permission errors are treated as absence; use
    /// [`ConfigLocator::try_locate`] to observe them.
    #[must_use]
    pub fn locate(&self, name: impl AsRef<Path>) -> Option<PathBuf> {
        self.candidates(name)
            .into_iter()
            .find(|candidate| match probe(candidate) {
                Probe::Found => true,
                Probe::Missing => false,
                Probe::Failed(err) => {
                    tracing::debug!(
                        path = %candidate.display(),
                        error = %err,
                        "treating unreadable configuration candidate as missing"
                    );
                    false
                }
            })
    }

    /// Returns the first existing candidate for `name` as a UTF-8 path.
    ///
    /// Returns `None` when nothing exists or the match is not valid UTF-8.
    #[must_use]
    pub fn locate_utf8(&self, name: impl AsRef<Path>) -> Option<Utf8PathBuf> {
        self.locate(name)
            .and_then(|path| Utf8PathBuf::from_path_buf(path).ok())
    }

    /// Returns the first existing candidate for `name`, surfacing probe errors.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::Probe`] for the first candidate whose metadata
    /// cannot be read for a reason other than it not existing (a missing entry
    /// or a non-directory ancestor both count as absence). Candidates after
    /// that one are not examined.
    pub fn try_locate(&self, name: impl AsRef<Path>) -> LocateResult<Option<PathBuf>> {
        for candidate in self.candidates(name) {
            match probe(&candidate) {
                Probe::Found => return Ok(Some(candidate)),
                Probe::Missing => {}
                Probe::Failed(source) => {
                    return Err(LocateError::Probe {
                        path: candidate,
                        source,
                    });
                }
            }
        }
        Ok(None)
    }

    /// Returns every existing candidate for `name`, highest precedence first.
    ///
    /// Useful when system-wide files provide defaults that user files refine.
    /// Probe failures are treated as absence.
    #[must_use]
    pub fn locate_all(&self, name: impl AsRef<Path>) -> Vec<PathBuf> {
        self.candidates(name)
            .into_iter()
            .filter(|candidate| matches!(probe(candidate), Probe::Found))
            .collect()
    }

    fn relative_name(&self, name: &Path) -> PathBuf {
        let mut relative = PathBuf::new();
        if let Some(prefix) = &self.prefix {
            push_relative(&mut relative, prefix);
        }
        push_relative(&mut relative, name);
        relative
    }
}

/// Looks up `name` in the XDG configuration directories.
///
/// Equivalent to [`ConfigLocator::new`] followed by
/// [`ConfigLocator::locate`].
///
/// # Examples
///
/// ```rust,no_run
/// match xdg_locate::locate_config_file("git/config") {
///     Some(path) => println!("{}", path.display()),
///     None => println!("no git configuration found"),
/// }
/// ```
#[must_use]
pub fn locate_config_file(name: impl AsRef<Path>) -> Option<PathBuf> {
    ConfigLocator::new().locate(name)
}

/// Looks up `name`, returning unexpected probe errors.
///
/// # Errors
///
/// See [`ConfigLocator::try_locate`].
pub fn try_locate_config_file(name: impl AsRef<Path>) -> LocateResult<Option<PathBuf>> {
    ConfigLocator::new().try_locate(name)
}

/// Returns every existing match for `name`, highest precedence first.
#[must_use]
pub fn locate_all_config_files(name: impl AsRef<Path>) -> Vec<PathBuf> {
    ConfigLocator::new().locate_all(name)
}

fn probe(candidate: &Path) -> Probe {
    match std::fs::metadata(candidate) {
        Ok(_) => {
            tracing::debug!(path = %candidate.display(), "found configuration candidate");
            Probe::Found
        }
        Err(err)
            if matches!(
                err.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
            ) =>
        {
            Probe::Missing
        }
        Err(err) => Probe::Failed(err),
    }
}

/// Appends the components of `name` to `target`, dropping root and prefix
/// components so `name` always stays relative.
fn push_relative(target: &mut PathBuf, name: &Path) {
    target.extend(
        name.components()
            .filter(|component| !matches!(component, Component::RootDir | Component::Prefix(_))),
    );
}

/// Joins `name` beneath `base`, then cleans the whole path lexically.
pub(crate) fn join_relative(base: &Path, name: &Path) -> PathBuf {
    let mut joined = base.to_path_buf();
    push_relative(&mut joined, name);
    clean(&joined)
}

/// Lexically normalises `path` without touching the filesystem.
///
/// `.` components vanish, `..` removes the preceding normal component, `..`
/// directly under the root is dropped, and leading `..` components of a
/// relative path are kept. An empty result becomes `.`.
pub(crate) fn clean(path: &Path) -> PathBuf {
    let mut root = PathBuf::new();
    let mut is_rooted = false;
    let mut parts: Vec<&OsStr> = Vec::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) => root.push(component.as_os_str()),
            Component::RootDir => {
                root.push(component.as_os_str());
                is_rooted = true;
            }
            Component::CurDir => {}
            Component::Normal(part) => parts.push(part),
            Component::ParentDir => match parts.last() {
                Some(last) if last.as_encoded_bytes() != b".." => {
                    parts.pop();
                }
                _ if is_rooted => {}
                _ => parts.push(component.as_os_str()),
            },
        }
    }
    if parts.is_empty() && root.as_os_str().is_empty() {
        return PathBuf::from(".");
    }
    root.extend(parts);
    root
}
