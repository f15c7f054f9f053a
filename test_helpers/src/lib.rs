//! Test helpers shared across crates in the workspace.
//!
//! - [`env`] serialises environment mutation and restores variables on drop.
//! - [`fs`] creates configuration files inside temporary directory trees.

pub mod env;
pub mod fs;
