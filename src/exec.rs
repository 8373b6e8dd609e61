//! Invocation of the program under test.
//!
//! Execution is modeled as a function from `(executable, case)` to captured
//! output or error; the runner stays free of process-handling details and
//! unit tests can substitute a stub executable.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use crate::errors::SuiteError;
use crate::suite::TestCase;

/// Runs the executable against one case and returns its normalized stdout.
///
/// The case's resource file is passed as the single argument. If the `.in`
/// fixture exists its raw bytes are piped to the child's stdin; otherwise no
/// input is supplied. A nonzero exit status is fatal.
pub fn execute_case(executable: &Path, case: &TestCase) -> Result<String, SuiteError> {
    let input = read_input_fixture(case)?;

    let mut command = Command::new(executable);
    command
        .arg(case.resource_path())
        .stdin(if input.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = command.spawn().map_err(|source| SuiteError::Spawn {
        program: executable.to_path_buf(),
        source,
    })?;

    if let (Some(bytes), Some(mut stdin)) = (input, child.stdin.take()) {
        if let Err(source) = stdin.write_all(&bytes) {
            // A child that exits without draining stdin closes the pipe;
            // that is its business, not a runner failure.
            if source.kind() != io::ErrorKind::BrokenPipe {
                return Err(SuiteError::PipeInput {
                    program: executable.to_path_buf(),
                    case: case.name.clone(),
                    source,
                });
            }
        }
    }

    let output = child
        .wait_with_output()
        .map_err(|source| SuiteError::Spawn {
            program: executable.to_path_buf(),
            source,
        })?;

    if !output.status.success() {
        return Err(SuiteError::CommandFailed {
            program: executable.to_path_buf(),
            case: case.name.clone(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        });
    }

    Ok(normalize_output(&String::from_utf8_lossy(&output.stdout)))
}

/// Reads the optional stdin fixture.
///
/// A missing fixture yields `None`; a fixture that exists but cannot be read
/// is an error.
fn read_input_fixture(case: &TestCase) -> Result<Option<Vec<u8>>, SuiteError> {
    let path = case.input_path();
    if !path.exists() {
        return Ok(None);
    }
    fs::read(path)
        .map(Some)
        .map_err(|source| SuiteError::InputFixture {
            path: path.to_path_buf(),
            source,
        })
}

/// Joins the captured output's lines with `\n`, erasing trailing-newline and
/// CRLF discrepancies between the program under test and its fixtures.
pub fn normalize_output(raw: &str) -> String {
    raw.lines().collect::<Vec<_>>().join("\n")
}
