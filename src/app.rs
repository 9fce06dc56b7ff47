//! Front end: the demo, sort and benchmark modes, written against generic
//! readers and writers so they can be driven without a process.

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::benchmark::{self, BenchmarkConfig};
use crate::cli::{CliArgs, Mode};
use crate::error::Result;
use crate::gap_sequence::GapSequence;
use crate::input::read_integers;
use crate::shell_sort;

/// Fixed array sorted by `--demo`.
pub const DEMO_ARRAY: [i32; 8] = [23, 12, 1, 8, 34, 54, 2, 3];

/// Write values space-separated on one line, followed by a newline.
pub fn write_values<W: Write>(out: &mut W, values: &[i32]) -> std::io::Result<()> {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.write_all(b" ")?;
        }
        write!(out, "{}", value)?;
    }
    out.write_all(b"\n")
}

/// Sort [`DEMO_ARRAY`] and print labeled before/after lines.
pub fn run_demo<W: Write>(out: &mut W, sequence: GapSequence) -> Result<()> {
    let mut data = DEMO_ARRAY;

    out.write_all(b"Before: ")?;
    write_values(out, &data)?;

    shell_sort::sort(&mut data, sequence);

    out.write_all(b"After:  ")?;
    write_values(out, &data)?;
    out.flush()?;
    Ok(())
}

/// Read integers from `input`, sort them and print them on one line.
pub fn run_sort<R: BufRead, W: Write>(input: R, out: &mut W, sequence: GapSequence) -> Result<()> {
    let mut values = read_integers(input)?;
    debug!(count = values.len(), %sequence, "sorting input");

    shell_sort::sort(values.as_mut_slice(), sequence);

    write_values(out, values.as_slice())?;
    out.flush()?;
    values.release();
    Ok(())
}

/// Time every gap sequence, print the comparison table and optionally save
/// the report.
pub fn run_benchmark<W: Write>(
    out: &mut W,
    config: &BenchmarkConfig,
    report_path: Option<&Path>,
) -> Result<()> {
    writeln!(
        out,
        "Shell sort benchmark: {} sizes, {} repetitions each",
        config.sizes.len(),
        config.reps
    )?;
    writeln!(out)?;

    let report = benchmark::run_benchmark(config);
    out.write_all(report.to_table().as_bytes())?;

    if let Some(path) = report_path {
        report.write_to_file(path)?;
        writeln!(out)?;
        writeln!(out, "Report written to: {}", path.display())?;
    }
    out.flush()?;
    Ok(())
}

/// Dispatch on the parsed arguments using the process's stdin and stdout.
pub fn run(args: &CliArgs) -> Result<()> {
    let sequence = args.gap_sequence();
    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());

    let mode = args.mode();
    info!(?mode, %sequence, "starting");
    match mode {
        Mode::Demo => run_demo(&mut out, sequence),
        Mode::Benchmark => {
            let config = BenchmarkConfig::from_args(&args.sizes, args.reps)?;
            run_benchmark(&mut out, &config, args.report.as_deref())
        }
        Mode::Sort => run_sort(std::io::stdin().lock(), &mut out, sequence),
    }
}
