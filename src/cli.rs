//! Command-line arguments for `shell-sort`.

use std::path::PathBuf;

use clap::Parser;

use crate::benchmark::DEFAULT_REPS;
use crate::gap_sequence::GapSequence;

/// Sort whitespace-separated integers from stdin with shell sort.
#[derive(Debug, Parser)]
#[command(
    name = "shell-sort",
    about = "Sort integers from stdin with shell sort",
    long_about = "Reads whitespace-separated integers from stdin until end of input or the \
                  first token that is not an integer, sorts them with shell sort and prints \
                  them space-separated on one line.\n\n\
                  The gap sequence is chosen with --sequence (shell, knuth or sedgewick). \
                  Unrecognized names fall back to shell.",
    version
)]
pub struct CliArgs {
    /// Gap sequence: shell, knuth or sedgewick
    #[arg(
        long,
        value_name = "NAME",
        default_value = "shell",
        num_args = 0..=1,
        default_missing_value = "shell"
    )]
    pub sequence: String,

    /// Sort a fixed demo array and print it before and after
    #[arg(long)]
    pub demo: bool,

    /// Time all gap sequences against each other instead of sorting stdin
    #[arg(long)]
    pub benchmark: bool,

    /// Comma-separated array sizes for --benchmark
    #[arg(long, value_name = "LIST", default_value = "1000,5000,10000,20000,50000")]
    pub sizes: String,

    /// Repetitions per size for --benchmark
    #[arg(long, value_name = "N", default_value_t = DEFAULT_REPS)]
    pub reps: usize,

    /// Write the benchmark results to a file (Markdown for .md, CSV otherwise)
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Verbose logging to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// What the binary has been asked to do. `--demo` wins over `--benchmark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Demo,
    Benchmark,
    Sort,
}

impl CliArgs {
    #[must_use]
    pub fn gap_sequence(&self) -> GapSequence {
        GapSequence::from_name(&self.sequence)
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.demo {
            Mode::Demo
        } else if self.benchmark {
            Mode::Benchmark
        } else {
            Mode::Sort
        }
    }
}
