//! Shell Sort CLI
//!
//! Reads whitespace-separated integers from stdin, sorts them with shell sort
//! and prints them on one line.
//!
//! Usage:
//!   shell-sort [--sequence shell|knuth|sedgewick] < numbers.txt
//!   shell-sort --demo
//!   shell-sort --benchmark [--sizes 1000,5000] [--reps 20] [--report out.csv]

use clap::Parser;

use gapsort::app;
use gapsort::cli::CliArgs;
use gapsort::logging::init_logging;

fn main() {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    if let Err(e) = app::run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
