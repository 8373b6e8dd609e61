//! The suite manifest and test-case data model.
//!
//! A suite is an ordered list of test-case names, one per line. Each name
//! locates three fixture paths under the fixture directory: the resource
//! file handed to the program under test, an optional `.in` file piped to
//! its stdin, and a mandatory `.out` file holding the expected output.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::SuiteError;

/// Configuration for a suite run.
pub struct RunConfig {
    /// Directory holding the per-case fixture files.
    pub fixture_dir: PathBuf,
    /// Whether report output uses terminal colors.
    pub use_colors: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            fixture_dir: PathBuf::from("tests"),
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

/// A single named test case with its derived fixture paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    resource: PathBuf,
    input: PathBuf,
    expected: PathBuf,
}

impl TestCase {
    pub fn new(name: impl Into<String>, fixture_dir: &Path) -> Self {
        let name = name.into();
        let resource = fixture_dir.join(&name);
        let input = fixture_dir.join(format!("{name}.in"));
        let expected = fixture_dir.join(format!("{name}.out"));
        Self {
            name,
            resource,
            input,
            expected,
        }
    }

    /// Path passed as the single argument to the program under test.
    pub fn resource_path(&self) -> &Path {
        &self.resource
    }

    /// Path of the optional stdin fixture.
    pub fn input_path(&self) -> &Path {
        &self.input
    }

    /// Path of the mandatory expected-output fixture.
    pub fn expected_path(&self) -> &Path {
        &self.expected
    }
}

/// An ordered collection of test cases loaded from a manifest.
#[derive(Debug, Clone)]
pub struct Suite {
    pub cases: Vec<TestCase>,
}

impl Suite {
    /// Reads a manifest file and parses it into a suite.
    pub fn load(path: &Path, fixture_dir: &Path) -> Result<Self, SuiteError> {
        let text = fs::read_to_string(path).map_err(|source| SuiteError::Manifest {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_manifest(&text, fixture_dir))
    }

    /// Parses manifest text: one case name per line, right-trimmed, empty
    /// lines skipped, order preserved.
    pub fn from_manifest(text: &str, fixture_dir: &Path) -> Self {
        let cases = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(|name| TestCase::new(name, fixture_dir))
            .collect();
        Self { cases }
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }
}
