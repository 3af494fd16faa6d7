//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros. Argument-count rules
//! are not expressed here; they belong to the resolver so that every
//! violation is reported with the same usage message.
//!
//! There are no short options: any argument starting with a single `-` is a
//! file name. Only the exact long options below are recognized, and only
//! before the first file name.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// reverse: print the lines of a file in reverse order.
///
/// With no files, reads standard input. With one file, writes to standard
/// output. With two files, writes to the second, which must not be the
/// same file as the first.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "reverse")]
#[command(version, about, long_about = None)]
#[command(override_usage = "reverse [<input> [<output>]]")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Print help.
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Print version.
    #[arg(long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Raise diagnostic verbosity on stderr (once debug, twice trace).
    #[arg(long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Diagnostic filter directive; overrides --verbose.
    #[arg(long, env = "REVERSE_LOG", value_name = "DIRECTIVE", hide_env_values = true)]
    pub log_filter: Option<String>,

    /// Input file, optionally followed by an output file.
    #[arg(value_name = "FILE", allow_hyphen_values = true, trailing_var_arg = true)]
    pub files: Vec<PathBuf>,
}
