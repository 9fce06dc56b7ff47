//! Gap Sequence Generators
//!
//! Each generator maps the length `n` of the array to be sorted to the gaps the
//! shell sort applies, widest first. Every returned sequence is strictly
//! descending, holds only values in `1..n`, and ends in `1` whenever `n >= 2`,
//! so the last pass is always a plain insertion sort.
//!
//! Supported sequences:
//! - **Shell**: `n/2, n/4, …, 1` - O(n²) worst case
//! - **Knuth**: `…, 40, 13, 4, 1` (`h = 3h + 1`) - O(n^1.5)
//! - **Sedgewick** (1982): interleaved `4^k + 3·2^(k-1) + 1` and
//!   `9·4^k − 9·2^k + 1` - O(n^4/3)

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

/// Starting capacity of the gap accumulators. Large enough for every
/// sequence on any realistic `n` without regrowing.
const GAP_CAPACITY: usize = 32;

/// Named gap sequence. Unknown names resolve to [`GapSequence::Shell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GapSequence {
    #[default]
    Shell,
    Knuth,
    Sedgewick,
}

impl GapSequence {
    /// Every supported sequence, in the order they are reported.
    pub const ALL: [GapSequence; 3] = [
        GapSequence::Shell,
        GapSequence::Knuth,
        GapSequence::Sedgewick,
    ];

    /// Look up a sequence by name, falling back to `Shell` for anything
    /// unrecognized.
    pub fn from_name(name: &str) -> Self {
        match name {
            "shell" => GapSequence::Shell,
            "knuth" => GapSequence::Knuth,
            "sedgewick" => GapSequence::Sedgewick,
            other => {
                debug!(name = other, "unrecognized gap sequence, using shell");
                GapSequence::Shell
            }
        }
    }

    /// Canonical lowercase name, as accepted by [`GapSequence::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            GapSequence::Shell => "shell",
            GapSequence::Knuth => "knuth",
            GapSequence::Sedgewick => "sedgewick",
        }
    }

    /// Generate the gaps for an array of length `n`.
    pub fn gaps(self, n: usize) -> Vec<usize> {
        match self {
            GapSequence::Shell => shell_gaps(n),
            GapSequence::Knuth => knuth_gaps(n),
            GapSequence::Sedgewick => sedgewick_gaps(n),
        }
    }
}

impl FromStr for GapSequence {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(GapSequence::from_name(s))
    }
}

impl fmt::Display for GapSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shell's original halving sequence: `n/2, n/4, …, 1`.
///
/// Produces ⌊log2(n)⌋ gaps.
pub fn shell_gaps(n: usize) -> Vec<usize> {
    let mut gaps = Vec::with_capacity(GAP_CAPACITY);
    let mut gap = n / 2;
    while gap > 0 {
        gaps.push(gap);
        gap /= 2;
    }
    gaps
}

/// Knuth's sequence `1, 4, 13, 40, …` restricted to terms below `n`,
/// returned widest first.
pub fn knuth_gaps(n: usize) -> Vec<usize> {
    let mut gaps = Vec::with_capacity(GAP_CAPACITY);
    let mut h: usize = 1;
    while h < n {
        gaps.push(h);
        h = match h.checked_mul(3).and_then(|t| t.checked_add(1)) {
            Some(next) => next,
            None => break,
        };
    }
    gaps.reverse();
    gaps
}

/// Sedgewick's 1982 sequence `1, 8, 23, 77, 281, …` interleaved with
/// `19, 109, 505, 2161, …`, restricted to terms below `n`, returned widest
/// first.
///
/// Terms are computed in `u128` so no intermediate value overflows for any
/// `usize` length. Both formulas yield `1` at `k = 0`; the duplicate is dropped.
pub fn sedgewick_gaps(n: usize) -> Vec<usize> {
    let limit = n as u128;
    let mut gaps = Vec::with_capacity(GAP_CAPACITY);

    let mut k: u32 = 0;
    loop {
        let pow4 = 1u128 << (2 * k);
        let pow2 = 1u128 << k;
        let g1 = if k == 0 { 1 } else { pow4 + 3 * (pow2 >> 1) + 1 };
        let g2 = 9 * pow4 - 9 * pow2 + 1;

        let mut added = false;
        for term in [g1, g2] {
            if term < limit {
                // term < n, so it fits in usize.
                gaps.push(term as usize);
                added = true;
            }
        }
        if !added {
            break;
        }
        k += 1;
    }

    gaps.sort_unstable_by(|a, b| b.cmp(a));
    gaps.dedup();
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn assert_well_formed(gaps: &[usize], n: usize) {
        assert!(
            gaps.windows(2).all(|w| w[0] > w[1]),
            "{:?} not strictly descending",
            gaps
        );
        assert!(
            gaps.iter().all(|&g| g > 0 && g < n),
            "{:?} out of range for n={}",
            gaps,
            n
        );
        if n >= 2 {
            assert_eq!(gaps.last(), Some(&1), "n={n}");
        } else {
            assert!(gaps.is_empty());
        }
    }

    #[test]
    fn test_shell_gaps_eight() {
        assert_eq!(shell_gaps(8), vec![4, 2, 1]);
    }

    #[test]
    fn test_shell_gaps_count_is_floor_log2() {
        for n in 2..2000usize {
            assert_eq!(shell_gaps(n).len(), n.ilog2() as usize);
        }
    }

    #[test]
    fn test_knuth_gaps_twenty() {
        assert_eq!(knuth_gaps(20), vec![13, 4, 1]);
    }

    #[test]
    fn test_knuth_gaps_boundaries() {
        assert_eq!(knuth_gaps(2), vec![1]);
        assert_eq!(knuth_gaps(4), vec![1]);
        assert_eq!(knuth_gaps(5), vec![4, 1]);
        assert_eq!(knuth_gaps(41), vec![40, 13, 4, 1]);
    }

    #[test]
    fn test_sedgewick_gaps_hundred() {
        assert_eq!(sedgewick_gaps(100), vec![77, 23, 19, 8, 1]);
    }

    #[test]
    fn test_sedgewick_gaps_small() {
        assert_eq!(sedgewick_gaps(2), vec![1]);
        assert_eq!(sedgewick_gaps(9), vec![8, 1]);
        assert_eq!(sedgewick_gaps(20), vec![19, 8, 1]);
    }

    #[test]
    fn test_sedgewick_gaps_prefix() {
        let gaps = sedgewick_gaps(10_000);
        assert_eq!(
            gaps,
            vec![8929, 4193, 2161, 1073, 505, 281, 109, 77, 23, 19, 8, 1]
        );
    }

    #[test]
    fn test_sedgewick_gaps_huge_n() {
        let gaps = sedgewick_gaps(usize::MAX);
        assert_well_formed(&gaps, usize::MAX);
    }

    #[test]
    fn test_knuth_gaps_huge_n() {
        let gaps = knuth_gaps(usize::MAX);
        assert_well_formed(&gaps, usize::MAX);
    }

    #[test]
    fn test_empty_and_single() {
        for sequence in GapSequence::ALL {
            assert!(sequence.gaps(0).is_empty());
            assert!(sequence.gaps(1).is_empty());
        }
    }

    #[test]
    fn test_all_sequences_well_formed() {
        let mut rng = rand::thread_rng();
        for sequence in GapSequence::ALL {
            for n in 0..500 {
                assert_well_formed(&sequence.gaps(n), n);
            }
            for _ in 0..100 {
                let n = rng.gen_range(0..10_000_000);
                assert_well_formed(&sequence.gaps(n), n);
            }
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(GapSequence::from_name("shell"), GapSequence::Shell);
        assert_eq!(GapSequence::from_name("knuth"), GapSequence::Knuth);
        assert_eq!(GapSequence::from_name("sedgewick"), GapSequence::Sedgewick);
        assert_eq!(GapSequence::from_name("foo"), GapSequence::Shell);
        assert_eq!(GapSequence::from_name(""), GapSequence::Shell);
        assert_eq!(GapSequence::from_name("Knuth"), GapSequence::Shell);
    }

    #[test]
    fn test_from_str_and_display() {
        for sequence in GapSequence::ALL {
            let parsed: GapSequence = sequence.to_string().parse().unwrap();
            assert_eq!(parsed, sequence);
        }
        assert_eq!(GapSequence::default(), GapSequence::Shell);
    }
}
