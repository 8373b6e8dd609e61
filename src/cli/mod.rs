//! The suite-runner command-line interface.
//!
//! This module is the entry point for the `run_suite` binary: it parses the
//! arguments, runs the suite against the executable under test, and maps the
//! result to a process exit code.

use clap::Parser;
use termcolor::{ColorChoice, StandardStream};

use crate::cli::args::RunSuiteArgs;
use crate::errors::print_error;
use crate::runner;
use crate::suite::RunConfig;

pub mod args;
pub mod output;

/// Parses the command line and runs the suite.
///
/// Returns the process exit code: 0 for a completed run with no failures,
/// 1 for a completed run with failures or any fatal error.
pub fn run() -> i32 {
    let args = RunSuiteArgs::parse();
    let config = RunConfig::default();

    let choice = if config.use_colors {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    match runner::run_suite(&args.executable, &args.suite_file, &config, &mut stdout) {
        Ok(summary) => {
            if summary.failed > 0 {
                1
            } else {
                0
            }
        }
        Err(error) => {
            print_error(error);
            1
        }
    }
}
