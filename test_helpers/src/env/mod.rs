//! Helpers for safely mutating environment variables in tests.
//!
//! An [`EnvScope`] acquires a global re-entrant mutex when it is created and
//! keeps it until it is dropped. Every variable changed through the scope is
//! restored, in reverse order of mutation, before the lock is released.
//!
//! Behaviour:
//! - Tests holding a scope never overlap with one another, so lookups that
//!   read `HOME` or `XDG_*` observe only their own settings.
//! - Nested scopes on the same thread are allowed because the mutex is
//!   re-entrant; the inner scope restores its own changes first.
//! - Touching the same key several times within one scope restores the value
//!   seen before the first change.
//!
//! # Examples
//!
//! ```
//! use test_helpers::env::EnvScope;
//!
//! let mut scope = EnvScope::new();
//! scope.set("XDG_CONFIG_HOME", "/tmp/config").remove("XDG_CONFIG_DIRS");
//! assert_eq!(std::env::var("XDG_CONFIG_HOME").as_deref(), Ok("/tmp/config"));
//! drop(scope);
//! ```

use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::sync::LazyLock;

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// RAII scope holding the environment lock and the values it replaced.
#[must_use = "dropping restores the environment and releases the lock"]
pub struct EnvScope {
    saved: Vec<(String, Option<OsString>)>,
    _lock: ReentrantMutexGuard<'static, ()>,
}

impl EnvScope {
    /// Acquires the environment lock, blocking until other scopes finish.
    pub fn new() -> Self {
        Self {
            saved: Vec::new(),
            _lock: ENV_MUTEX.lock(),
        }
    }

    /// Sets `key` to `value` for the lifetime of the scope.
    pub fn set(&mut self, key: impl Into<String>, value: impl AsRef<OsStr>) -> &mut Self {
        let name = key.into();
        self.remember(&name);
        // SAFETY: `ENV_MUTEX` is held for the lifetime of `self`.
        unsafe { env::set_var(&name, value.as_ref()) };
        self
    }

    /// Removes `key` for the lifetime of the scope.
    pub fn remove(&mut self, key: impl Into<String>) -> &mut Self {
        let name = key.into();
        self.remember(&name);
        // SAFETY: `ENV_MUTEX` is held for the lifetime of `self`.
        unsafe { env::remove_var(&name) };
        self
    }

    /// Removes every key in `keys` for the lifetime of the scope.
    pub fn remove_all<I, K>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        for key in keys {
            self.remove(key);
        }
        self
    }

    fn remember(&mut self, name: &str) {
        let original = env::var_os(name);
        self.saved.push((name.to_owned(), original));
    }
}

impl Default for EnvScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EnvScope {
    fn drop(&mut self) {
        while let Some((name, original)) = self.saved.pop() {
            match original {
                // SAFETY: `ENV_MUTEX` is still held; `_lock` drops after this.
                Some(value) => unsafe { env::set_var(&name, value) },
                // SAFETY: as above.
                None => unsafe { env::remove_var(&name) },
            }
        }
    }
}

impl fmt::Debug for EnvScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvScope")
            .field(
                "keys",
                &self.saved.iter().map(|(key, _)| key).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}
