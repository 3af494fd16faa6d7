//! Binary entry point for `reverse`.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::Parser;
use clap::error::ErrorKind;
use reverse::logging::init_logging;
use reverse::{Cli, Error, execute};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            eprintln!("{}", Error::Usage);
            return ExitCode::FAILURE;
        }
    };

    init_logging(cli.log_filter.as_deref(), cli.verbose);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
