//! CLI argument parsing.
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_WORK_DIR: &str = ".";

/// Global CLI arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find the nearest CHANGELOG.md and report its highest version.
    Run(RunArgs),
}

/// Arguments for the `run` subcommand.
#[derive(ClapArgs, Debug, Clone, PartialEq, Eq)]
pub struct RunArgs {
    #[arg(short, long, default_value = DEFAULT_WORK_DIR)]
    /// Directory the changelog search starts from.
    pub work_dir: PathBuf,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from(DEFAULT_WORK_DIR),
        }
    }
}
