//! Tooling & Integration Layer
//!
//! Command-line front end standing in for an agent host.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
