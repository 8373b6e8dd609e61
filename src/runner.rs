//! Sequential suite orchestration.
//!
//! One case at a time, in manifest order: execute, read the expected
//! output, judge, report. A mismatch is a reported failure and the run
//! continues; any `SuiteError` aborts the run immediately.

use std::fs;
use std::path::Path;

use termcolor::WriteColor;

use crate::cli::output;
use crate::errors::SuiteError;
use crate::exec;
use crate::suite::{RunConfig, Suite, TestCase};

/// The judged result of a single case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    Pass {
        name: String,
    },
    Fail {
        name: String,
        expected: String,
        actual: String,
    },
}

impl CaseOutcome {
    pub fn name(&self) -> &str {
        match self {
            Self::Pass { name } | Self::Fail { name, .. } => name,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass { .. })
    }
}

/// Aggregate tally of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    pub fn from_outcomes(outcomes: &[CaseOutcome]) -> Self {
        let passed = outcomes.iter().filter(|o| o.is_pass()).count();
        Self {
            total: outcomes.len(),
            passed,
            failed: outcomes.len() - passed,
        }
    }
}

/// Runs every case in the manifest, reporting to `out`.
///
/// Returns the summary tally of a completed run. Fatal errors (unreadable
/// manifest, unlaunchable executable, nonzero child exit, missing `.out`
/// fixture) abort the run with no summary.
pub fn run_suite<W: WriteColor>(
    executable: &Path,
    suite_path: &Path,
    config: &RunConfig,
    out: &mut W,
) -> Result<Summary, SuiteError> {
    let suite = Suite::load(suite_path, &config.fixture_dir)?;
    let mut outcomes = Vec::with_capacity(suite.len());

    for case in &suite.cases {
        output::print_banner(out);
        let actual = exec::execute_case(executable, case)?;
        let expected = read_expected(case)?;
        let outcome = judge(case, &expected, &actual);
        output::print_outcome(out, &outcome);
        outcomes.push(outcome);
    }

    let summary = Summary::from_outcomes(&outcomes);
    output::print_summary(out, &outcomes, summary);
    Ok(summary)
}

/// Reads the mandatory expected-output fixture.
fn read_expected(case: &TestCase) -> Result<String, SuiteError> {
    fs::read_to_string(case.expected_path()).map_err(|source| SuiteError::ExpectedOutput {
        path: case.expected_path().to_path_buf(),
        source,
    })
}

/// Compares normalized captured output against the right-stripped expected
/// text and produces the case outcome.
pub fn judge(case: &TestCase, expected: &str, actual: &str) -> CaseOutcome {
    let expected = expected.trim_end();
    if expected == actual {
        CaseOutcome::Pass {
            name: case.name.clone(),
        }
    } else {
        CaseOutcome::Fail {
            name: case.name.clone(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}
