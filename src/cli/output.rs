//! Handles all user-facing report output for the suite runner.
//!
//! Every function writes to a caller-supplied `WriteColor` sink, so the CLI
//! hands in a real `StandardStream` while tests capture the report in a
//! buffer. Color escape emission is decided by the sink itself.

use std::io::Write;

use difference::{Changeset, Difference};
use termcolor::{Color, ColorSpec, WriteColor};

use crate::runner::{CaseOutcome, Summary};

/// Separator printed before every case.
pub const BANNER: &str = "========================================";

pub fn print_banner<W: WriteColor>(out: &mut W) {
    let _ = writeln!(out, "{BANNER}");
}

/// Prints the per-case report line or failure block.
pub fn print_outcome<W: WriteColor>(out: &mut W, outcome: &CaseOutcome) {
    match outcome {
        CaseOutcome::Pass { name } => {
            let _ = out.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
            let _ = write!(out, "{name}");
            let _ = out.reset();
            let _ = writeln!(out, " passed");
        }
        CaseOutcome::Fail {
            name,
            expected,
            actual,
        } => {
            let _ = out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
            let _ = write!(out, "Failed");
            let _ = out.reset();
            let _ = writeln!(out, " {name}");
            let _ = writeln!(out, "Expected:");
            let _ = writeln!(out, "{expected}");
            let _ = writeln!(out, "Actual:");
            let _ = writeln!(out, "{actual}");
            print_diff(out, expected, actual);
        }
    }
}

/// Prints the summary tally and, when failures exist, the failed-test list.
pub fn print_summary<W: WriteColor>(out: &mut W, outcomes: &[CaseOutcome], summary: Summary) {
    let _ = writeln!(out);
    let _ = write!(out, "Suite summary: total {}, ", summary.total);
    let _ = out.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
    let _ = write!(out, "passed");
    let _ = out.reset();
    let _ = write!(out, " {}, ", summary.passed);
    let _ = out.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
    let _ = write!(out, "failed");
    let _ = out.reset();
    let _ = writeln!(out, " {}", summary.failed);

    if summary.failed > 0 {
        let _ = writeln!(out, "\nFailed tests:");
        for outcome in outcomes {
            if !outcome.is_pass() {
                let _ = writeln!(out, "  - {}", outcome.name());
            }
        }
    }
}

/// Prints a line-level diff between expected and actual text.
fn print_diff<W: WriteColor>(out: &mut W, expected: &str, actual: &str) {
    let _ = writeln!(out, "Diff:");
    let changeset = Changeset::new(expected, actual, "\n");
    for diff in &changeset.diffs {
        match diff {
            Difference::Same(ref x) => {
                let _ = out.reset();
                let _ = writeln!(out, " {x}");
            }
            Difference::Add(ref x) => {
                let _ = out.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
                let _ = writeln!(out, "+{x}");
            }
            Difference::Rem(ref x) => {
                let _ = out.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
                let _ = writeln!(out, "-{x}");
            }
        }
    }
    let _ = out.reset();
}
