//! Benchmark Report
//!
//! Collects per-algorithm timings for each array size and renders them as a
//! console comparison table, CSV, or a Markdown table.
//!
//! CSV layout (one row per algorithm and size):
//! ```text
//! algorithm,n,mean_ms,std_ms,verified
//! shell,1000,0.081,0.004,true
//! ```

use std::fmt::Write;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Result, ShellSortError};

/// Timing summary for one algorithm at one array size.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    /// Algorithm label (e.g. "shell", "knuth", "std_unstable")
    pub algorithm: String,
    /// Array size in elements
    pub array_size: usize,
    /// Mean execution time over all repetitions, in milliseconds
    pub mean_ms: f64,
    /// Population standard deviation of the execution time, in milliseconds
    pub std_ms: f64,
    /// Whether every repetition produced a sorted result
    pub verified: bool,
}

/// All results of one benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    /// Repetitions per (algorithm, size) pair
    pub reps: usize,
    pub results: Vec<BenchmarkResult>,
}

impl BenchmarkReport {
    pub fn new(reps: usize) -> Self {
        BenchmarkReport {
            reps,
            results: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }

    /// Distinct sizes, ascending.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.results.iter().map(|r| r.array_size).collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }

    /// Distinct algorithm labels in order of first appearance.
    pub fn algorithms(&self) -> Vec<&str> {
        let mut algorithms: Vec<&str> = Vec::new();
        for result in &self.results {
            if !algorithms.contains(&result.algorithm.as_str()) {
                algorithms.push(&result.algorithm);
            }
        }
        algorithms
    }

    pub fn find(&self, algorithm: &str, array_size: usize) -> Option<&BenchmarkResult> {
        self.results
            .iter()
            .find(|r| r.algorithm == algorithm && r.array_size == array_size)
    }

    /// Fastest verified algorithm for a size.
    pub fn fastest(&self, array_size: usize) -> Option<&BenchmarkResult> {
        self.results
            .iter()
            .filter(|r| r.array_size == array_size && r.verified)
            .min_by(|a, b| a.mean_ms.total_cmp(&b.mean_ms))
    }

    /// Console comparison table: one row per size, one mean-time column per
    /// algorithm.
    pub fn to_table(&self) -> String {
        let algorithms = self.algorithms();
        let mut output = String::new();

        write!(output, "{:>10}", "Size").unwrap();
        for algorithm in &algorithms {
            write!(output, " | {:>14}", format!("{} (ms)", algorithm)).unwrap();
        }
        writeln!(output, " | {:>14}", "Fastest").unwrap();

        write!(output, "{:-<10}", "").unwrap();
        for _ in 0..=algorithms.len() {
            write!(output, "-+-{:-<14}", "").unwrap();
        }
        writeln!(output).unwrap();

        for size in self.sizes() {
            write!(output, "{:>10}", size).unwrap();
            for algorithm in &algorithms {
                write!(output, " | {:>14}", self.cell(algorithm, size)).unwrap();
            }
            let fastest = self.fastest(size).map_or("N/A", |r| r.algorithm.as_str());
            writeln!(output, " | {:>14}", fastest).unwrap();
        }

        output
    }

    fn cell(&self, algorithm: &str, size: usize) -> String {
        match self.find(algorithm, size) {
            Some(r) if r.verified => format!("{:.3}", r.mean_ms),
            Some(_) => "ERROR".to_string(),
            None => "N/A".to_string(),
        }
    }

    pub fn to_csv(&self) -> String {
        let mut output = String::new();
        writeln!(output, "algorithm,n,mean_ms,std_ms,verified").unwrap();
        for r in &self.results {
            writeln!(
                output,
                "{},{},{:.6},{:.6},{}",
                r.algorithm, r.array_size, r.mean_ms, r.std_ms, r.verified
            )
            .unwrap();
        }
        output
    }

    pub fn to_markdown_table(&self) -> String {
        let algorithms = self.algorithms();
        let mut output = String::new();

        writeln!(output, "# Shell Sort Benchmark").unwrap();
        writeln!(output).unwrap();
        writeln!(
            output,
            "Mean time in milliseconds over {} repetitions (± population std).",
            self.reps
        )
        .unwrap();
        writeln!(output).unwrap();

        write!(output, "| Size |").unwrap();
        for algorithm in &algorithms {
            write!(output, " {} |", algorithm).unwrap();
        }
        writeln!(output, " Fastest |").unwrap();

        write!(output, "|-----:|").unwrap();
        for _ in &algorithms {
            write!(output, "------:|").unwrap();
        }
        writeln!(output, "--------|").unwrap();

        for size in self.sizes() {
            write!(output, "| {} |", format_size(size)).unwrap();
            for algorithm in &algorithms {
                match self.find(algorithm, size) {
                    Some(r) if r.verified => {
                        write!(output, " {:.3} ± {:.3} |", r.mean_ms, r.std_ms).unwrap()
                    }
                    Some(_) => write!(output, " ERROR |").unwrap(),
                    None => write!(output, " N/A |").unwrap(),
                }
            }
            let fastest = self.fastest(size).map_or("N/A", |r| r.algorithm.as_str());
            writeln!(output, " {} |", fastest).unwrap();
        }

        output
    }

    /// Write the report to `path`: Markdown for a `.md` extension, CSV
    /// otherwise.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let is_markdown = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
        let content = if is_markdown {
            self.to_markdown_table()
        } else {
            self.to_csv()
        };

        fs::write(path, content).map_err(|source| ShellSortError::ReportWrite {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), markdown = is_markdown, "benchmark report written");
        Ok(())
    }
}

/// Format a size as a human-readable string (e.g., "1K", "50K")
fn format_size(size: usize) -> String {
    if size >= 1_000_000 && size % 1_000_000 == 0 {
        format!("{}M", size / 1_000_000)
    } else if size >= 1_000 && size % 1_000 == 0 {
        format!("{}K", size / 1_000)
    } else {
        size.to_string()
    }
}
