//! Shell Sort Engine
//!
//! Generalized shell sort: a gapped insertion sort is run once per gap, widest
//! first. Every gap sequence produced by [`crate::gap_sequence`] ends in `1`,
//! so the final pass is a plain insertion sort and the result is always fully
//! sorted. The sequence only decides how much work that last pass has left.
//!
//! Complexity depends on the sequence: O(n²) worst case for Shell's halving,
//! O(n^1.5) for Knuth, O(n^4/3) for Sedgewick. Not stable.

use tracing::trace;

use crate::gap_sequence::GapSequence;

/// Sort a slice in-place with the given gap sequence.
///
/// # Arguments
/// * `data` - The slice to sort in-place
/// * `sequence` - Which gap sequence drives the passes
pub fn sort(data: &mut [i32], sequence: GapSequence) {
    let gaps = sequence.gaps(data.len());
    trace!(%sequence, len = data.len(), ?gaps, "shell sort");
    sort_with_gaps(data, &gaps);
}

/// Sort a slice in-place, selecting the gap sequence by name.
///
/// Unrecognized names fall back to Shell's halving sequence.
pub fn sort_by_name(data: &mut [i32], name: &str) {
    sort(data, GapSequence::from_name(name));
}

/// Run one gapped insertion sort pass per gap, in the order given.
///
/// `gaps` is expected to be descending and end in `1`; otherwise the slice is
/// only `g`-sorted for the last gap `g`. Gaps of `0` are skipped.
pub fn sort_with_gaps(data: &mut [i32], gaps: &[usize]) {
    let n = data.len();
    for &gap in gaps {
        if gap == 0 {
            continue;
        }
        for i in gap..n {
            let temp = data[i];
            let mut j = i;
            while j >= gap && data[j - gap] > temp {
                data[j] = data[j - gap];
                j -= gap;
            }
            data[j] = temp;
        }
    }
}

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
