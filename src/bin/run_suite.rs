// Suite-runner binary: delegates to the shared cli module.
// Usage: run_suite <executable> <suite_file>

use run_suite::cli;

fn main() {
    std::process::exit(cli::run());
}
