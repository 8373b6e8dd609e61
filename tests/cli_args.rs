// Regression tests for the CLI surface: usage errors and fatal diagnostics.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn missing_arguments_print_usage() {
    let mut cmd = Command::cargo_bin("run_suite").unwrap();
    cmd.assert().failure().code(2).stderr(contains("Usage"));
}

#[test]
fn unreadable_manifest_reports_miette_diagnostic() {
    let mut cmd = Command::cargo_bin("run_suite").unwrap();
    // The manifest is read before the executable is ever launched, so a
    // bogus executable path is fine here.
    cmd.arg("does-not-matter").arg("no/such/suite.txt");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(contains("run_suite::manifest"));
}
