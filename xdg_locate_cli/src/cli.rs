//! Command-line interface definitions for `xdg-locate`.

use camino::Utf8PathBuf;
use clap::{ArgAction, ArgGroup, Parser};

/// Parsed CLI arguments for `xdg-locate`.
#[derive(Debug, Parser)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each flag maps onto a distinct clap switch"
)]
#[command(name = "xdg-locate")]
#[command(about = "Locate configuration files using the XDG Base Directory search order")]
#[command(version)]
#[command(group(
    ArgGroup::new("mode")
        .args(["should_print_home", "should_print_dirs", "should_list_candidates", "should_find_all"])
))]
pub struct Args {
    /// File name to look up, relative to each configuration directory.
    #[arg(
        value_name = "NAME",
        required_unless_present_any = ["should_print_home", "should_print_dirs"]
    )]
    pub name: Option<Utf8PathBuf>,
    /// Application subdirectory inserted between each directory and NAME.
    #[arg(long, value_name = "DIR")]
    pub prefix: Option<Utf8PathBuf>,
    /// Print every existing match, highest precedence first.
    #[arg(long = "all")]
    pub should_find_all: bool,
    /// Fail when a candidate cannot be inspected instead of skipping it.
    #[arg(long = "strict", conflicts_with = "mode")]
    pub is_strict: bool,
    /// Print the candidate paths without checking whether they exist.
    #[arg(long = "candidates")]
    pub should_list_candidates: bool,
    /// Print the user configuration directory.
    #[arg(long = "home", conflicts_with_all = ["name", "prefix"])]
    pub should_print_home: bool,
    /// Print the system configuration directories, one per line.
    #[arg(long = "dirs", conflicts_with_all = ["name", "prefix"])]
    pub should_print_dirs: bool,
    /// Increase log verbosity (repeat for more detail).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// What a single invocation should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Print the resolved home configuration directory.
    Home,
    /// Print the resolved system directory list.
    Dirs,
    /// Print the candidates for a name without probing.
    Candidates(Utf8PathBuf),
    /// Print every existing match for a name.
    All(Utf8PathBuf),
    /// Print the first existing match for a name.
    First {
        /// Name to look up.
        name: Utf8PathBuf,
        /// Whether probe failures abort the lookup.
        is_strict: bool,
    },
}

impl Args {
    /// Resolves the flags into a single [`Mode`].
    ///
    /// Returns `None` when a lookup mode was requested without a name.
    #[must_use]
    pub fn mode(&self) -> Option<Mode> {
        if self.should_print_home {
            return Some(Mode::Home);
        }
        if self.should_print_dirs {
            return Some(Mode::Dirs);
        }
        let name = self.name.clone()?;
        Some(if self.should_list_candidates {
            Mode::Candidates(name)
        } else if self.should_find_all {
            Mode::All(name)
        } else {
            Mode::First {
                name,
                is_strict: self.is_strict,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use rstest::rstest;

    use super::{Args, Mode};

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("xdg-locate").chain(argv.iter().copied()))
    }

    #[rstest]
    #[case::first(&["app.toml"], Mode::First { name: "app.toml".into(), is_strict: false })]
    #[case::strict(&["--strict", "app.toml"], Mode::First { name: "app.toml".into(), is_strict: true })]
    #[case::all(&["--all", "app.toml"], Mode::All("app.toml".into()))]
    #[case::candidates(&["--candidates", "app.toml"], Mode::Candidates("app.toml".into()))]
    #[case::home(&["--home"], Mode::Home)]
    #[case::dirs(&["--dirs"], Mode::Dirs)]
    fn flags_select_mode(#[case] argv: &[&str], #[case] expected: Mode) -> anyhow::Result<()> {
        let args = parse(argv)?;
        anyhow::ensure!(args.mode() == Some(expected), "unexpected mode for {argv:?}");
        Ok(())
    }

    #[rstest]
    #[case::missing_name(&[])]
    #[case::conflicting_modes(&["--all", "--candidates", "app.toml"])]
    #[case::strict_with_all(&["--strict", "--all", "app.toml"])]
    #[case::home_and_dirs(&["--home", "--dirs"])]
    #[case::home_with_name(&["--home", "app.toml"])]
    #[case::dirs_with_name(&["--dirs", "app.toml"])]
    #[case::home_with_prefix(&["--home", "--prefix", "myapp"])]
    #[case::dirs_with_prefix(&["--dirs", "--prefix", "myapp"])]
    fn rejects_invalid_combinations(#[case] argv: &[&str]) {
        assert!(parse(argv).is_err(), "expected {argv:?} to be rejected");
    }

    #[test]
    fn counts_verbosity() -> anyhow::Result<()> {
        let args = parse(&["-vv", "--prefix", "myapp", "app.toml"])?;
        anyhow::ensure!(args.verbose == 2);
        anyhow::ensure!(args.prefix.as_deref() == Some(camino::Utf8Path::new("myapp")));
        Ok(())
    }
}
