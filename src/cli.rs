//! CLI argument parsing.
use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_FILE;

/// Global CLI arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE, global = true)]
    /// Path to the configuration file. Defaults apply when it is missing.
    pub config: String,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Release automation subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Summarize pending changesets as a changelog section.
    Changelog,

    /// Write the latest upstream release version into the version files.
    VersionBump,
}
