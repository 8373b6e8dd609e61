pub use crate::errors::SuiteError;
pub use crate::runner::{run_suite, CaseOutcome, Summary};
pub use crate::suite::{RunConfig, Suite, TestCase};

pub mod cli;
pub mod errors;
pub mod exec;
pub mod runner;
pub mod suite;
