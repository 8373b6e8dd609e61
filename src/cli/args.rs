//! Defines the command-line arguments for the suite runner.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::Parser;
use std::path::PathBuf;

/// The main CLI argument structure: two positional arguments, no flags.
#[derive(Debug, Parser)]
#[command(
    name = "run_suite",
    version,
    about = "Run a golden-output test suite against an external executable."
)]
pub struct RunSuiteArgs {
    /// The path to the executable under test.
    #[arg(required = true)]
    pub executable: PathBuf,

    /// The path to the suite manifest listing test-case names, one per line.
    #[arg(required = true)]
    pub suite_file: PathBuf,
}
