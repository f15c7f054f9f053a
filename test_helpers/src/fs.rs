//! Filesystem fixtures for configuration lookup tests.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Writes `contents` to `root/relative`, creating parent directories.
///
/// Returns the full path of the written file.
///
/// # Errors
///
/// Returns an error if a parent directory cannot be created or the file
/// cannot be written.
///
/// # Examples
///
/// ```
/// let dir = tempfile::tempdir()?;
/// let path = test_helpers::fs::write_config(dir.path(), "app/config.toml", "key = 1")?;
/// assert!(path.is_file());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn write_config(root: &Path, relative: impl AsRef<Path>, contents: &str) -> Result<PathBuf> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    std::fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Creates an empty file at `root/relative`, creating parent directories.
///
/// # Errors
///
/// See [`write_config`].
pub fn touch(root: &Path, relative: impl AsRef<Path>) -> Result<PathBuf> {
    write_config(root, relative, "")
}

#[cfg(test)]
mod tests {
    use super::{touch, write_config};

    #[test]
    fn write_config_creates_parents() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = write_config(dir.path(), "a/b/c.toml", "x = 1")?;
        anyhow::ensure!(path == dir.path().join("a/b/c.toml"));
        anyhow::ensure!(std::fs::read_to_string(&path)? == "x = 1");
        Ok(())
    }

    #[test]
    fn touch_creates_empty_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = touch(dir.path(), "empty")?;
        anyhow::ensure!(std::fs::metadata(&path)?.len() == 0);
        Ok(())
    }
}
