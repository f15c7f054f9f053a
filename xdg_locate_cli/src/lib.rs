//! Library half of the `xdg-locate` command.
//!
//! Argument parsing, dispatch and logging setup live here so they can be
//! exercised without spawning the binary.

pub mod cli;
pub mod error;
pub mod logging;
pub mod run;
