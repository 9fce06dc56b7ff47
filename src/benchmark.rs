//! Benchmark harness comparing the three gap sequences.
//!
//! For every configured array size, each algorithm sorts `reps` freshly
//! generated arrays. Repetition `r` uses data seeded with `r`, so all
//! algorithms see identical inputs. Values are drawn from `0..=1_000_000`.
//! The standard library's unstable sort (pdqsort) is timed alongside as the
//! baseline.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::error::{Result, ShellSortError};
use crate::gap_sequence::GapSequence;
use crate::report::{BenchmarkReport, BenchmarkResult};
use crate::shell_sort;

/// Default array sizes, matching the classic 1K..50K sweep
pub const DEFAULT_SIZES: [usize; 5] = [1_000, 5_000, 10_000, 20_000, 50_000];
/// Default repetitions per (algorithm, size) pair
pub const DEFAULT_REPS: usize = 20;
/// Upper bound (inclusive) of generated values
pub const MAX_VALUE: i32 = 1_000_000;

/// Something the benchmark can time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Shell(GapSequence),
    /// `slice::sort_unstable`, for reference
    StdUnstable,
}

impl Algorithm {
    /// Algorithms in report column order.
    pub fn all() -> Vec<Algorithm> {
        let mut algorithms: Vec<Algorithm> =
            GapSequence::ALL.iter().map(|&s| Algorithm::Shell(s)).collect();
        algorithms.push(Algorithm::StdUnstable);
        algorithms
    }

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Shell(sequence) => sequence.name(),
            Algorithm::StdUnstable => "std_unstable",
        }
    }

    pub fn sort(self, data: &mut [i32]) {
        match self {
            Algorithm::Shell(sequence) => shell_sort::sort(data, sequence),
            Algorithm::StdUnstable => data.sort_unstable(),
        }
    }
}

/// Validated benchmark settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    pub sizes: Vec<usize>,
    pub reps: usize,
}

impl BenchmarkConfig {
    pub fn new(sizes: Vec<usize>, reps: usize) -> Result<Self> {
        if sizes.is_empty() {
            return Err(ShellSortError::InvalidSizes(String::new()));
        }
        if reps == 0 {
            return Err(ShellSortError::ZeroReps);
        }
        Ok(BenchmarkConfig { sizes, reps })
    }

    /// Build a config from a comma-separated size list such as
    /// `"1000,5000,10000"`.
    pub fn from_args(sizes: &str, reps: usize) -> Result<Self> {
        Self::new(parse_sizes(sizes)?, reps)
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            sizes: DEFAULT_SIZES.to_vec(),
            reps: DEFAULT_REPS,
        }
    }
}

/// Parse a comma-separated list of positive sizes. Whitespace around entries
/// is ignored.
pub fn parse_sizes(list: &str) -> Result<Vec<usize>> {
    let invalid = || ShellSortError::InvalidSizes(list.to_string());
    let sizes = list
        .split(',')
        .map(|entry| match entry.trim().parse::<usize>() {
            Ok(size) if size > 0 => Ok(size),
            _ => Err(invalid()),
        })
        .collect::<Result<Vec<usize>>>()?;
    if sizes.is_empty() {
        return Err(invalid());
    }
    Ok(sizes)
}

/// Deterministic pseudo-random data for one repetition.
pub fn generate_data(size: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(0..=MAX_VALUE)).collect()
}

/// Mean and population standard deviation.
pub fn mean_std(samples: &[f64]) -> (f64, f64) {
    if samples.is_empty() {
        return (0.0, 0.0);
    }
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

/// Time one algorithm at one size over all repetitions.
pub fn measure(algorithm: Algorithm, size: usize, reps: usize) -> BenchmarkResult {
    let mut times_ms = Vec::with_capacity(reps);
    let mut verified = true;

    for rep in 0..reps {
        let mut data = generate_data(size, rep as u64);
        let start = Instant::now();
        algorithm.sort(&mut data);
        times_ms.push(start.elapsed().as_secs_f64() * 1000.0);

        if !shell_sort::is_sorted(&data) {
            warn!(algorithm = algorithm.label(), size, rep, "sort failed verification");
            verified = false;
        }
    }

    let (mean_ms, std_ms) = mean_std(&times_ms);
    debug!(algorithm = algorithm.label(), size, mean_ms, std_ms, "measured");
    BenchmarkResult {
        algorithm: algorithm.label().to_string(),
        array_size: size,
        mean_ms,
        std_ms,
        verified,
    }
}

/// Run every algorithm at every configured size.
pub fn run_benchmark(config: &BenchmarkConfig) -> BenchmarkReport {
    info!(sizes = ?config.sizes, reps = config.reps, "running benchmark");
    let mut report = BenchmarkReport::new(config.reps);
    for &size in &config.sizes {
        for algorithm in Algorithm::all() {
            report.add_result(measure(algorithm, size, config.reps));
        }
    }
    report
}
