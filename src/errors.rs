//! Error types for the suite runner.
//!
//! Every fatal condition the runner can hit is a `SuiteError` variant; a
//! mismatch between expected and actual output is deliberately NOT an error
//! (it is a reported test failure and the run continues).

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use miette::Diagnostic;
use thiserror::Error;

/// Fatal errors that abort a suite run.
#[derive(Debug, Error, Diagnostic)]
pub enum SuiteError {
    /// The suite manifest could not be read at all.
    #[error("failed to read suite manifest '{}'", path.display())]
    #[diagnostic(
        code(run_suite::manifest),
        help("the suite file must be a readable text file listing one test name per line")
    )]
    Manifest {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An input fixture exists on disk but could not be read.
    ///
    /// A missing fixture is not an error; the case simply runs without stdin.
    #[error("failed to read input fixture '{}'", path.display())]
    #[diagnostic(code(run_suite::input_fixture))]
    InputFixture {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The executable under test could not be started.
    #[error("failed to launch '{}'", program.display())]
    #[diagnostic(
        code(run_suite::spawn),
        help("check that the path points at an executable file")
    )]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the input fixture to the child's stdin failed.
    #[error("failed to pipe input to '{}' for case '{case}'", program.display())]
    #[diagnostic(code(run_suite::pipe_input))]
    PipeInput {
        program: PathBuf,
        case: String,
        #[source]
        source: io::Error,
    },

    /// The executable under test exited with a nonzero status.
    #[error("'{}' exited with {status} on case '{case}'", program.display())]
    #[diagnostic(
        code(run_suite::command_failed),
        help("the runner treats any nonzero exit as fatal; fix the program or the fixture")
    )]
    CommandFailed {
        program: PathBuf,
        case: String,
        status: ExitStatus,
        stderr: String,
    },

    /// The mandatory expected-output fixture is missing or unreadable.
    #[error("failed to read expected output '{}'", path.display())]
    #[diagnostic(
        code(run_suite::expected_output),
        help("every test case named in the suite needs a matching .out file")
    )]
    ExpectedOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SuiteError {
    /// The captured stderr of a failed child process, if any.
    pub fn child_stderr(&self) -> Option<&str> {
        match self {
            Self::CommandFailed { stderr, .. } if !stderr.is_empty() => Some(stderr),
            _ => None,
        }
    }
}

/// Prints a SuiteError with full miette diagnostics.
///
/// Use this for user-facing error display in the CLI.
pub fn print_error(error: SuiteError) {
    use miette::Report;
    if let Some(stderr) = error.child_stderr() {
        eprintln!("--- captured stderr ---");
        eprintln!("{stderr}");
    }
    let report = Report::new(error);
    eprintln!("{report:?}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_path() {
        let err = SuiteError::ExpectedOutput {
            path: PathBuf::from("tests/add.out"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read expected output 'tests/add.out'"
        );
    }

    #[test]
    fn diagnostic_codes_are_namespaced() {
        let err = SuiteError::Manifest {
            path: PathBuf::from("suite.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let code = miette::Diagnostic::code(&err).map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("run_suite::manifest"));
    }

    #[test]
    fn child_stderr_only_reported_when_present() {
        let err = SuiteError::Spawn {
            program: PathBuf::from("missing-binary"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.child_stderr().is_none());
    }
}
