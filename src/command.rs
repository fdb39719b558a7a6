//! Command execution.
//!
//! Each subcommand of the CLI has its own module exposing an `execute`
//! function taking the parsed arguments of that subcommand.

/// Locate the nearest changelog and report the highest version it mentions.
pub mod run;
