//! Shell sort with selectable gap sequences.
//!
//! Sorts `i32` slices in place with a generalized shell sort. The gap sequence
//! is one of:
//! - **Shell**: `n/2, n/4, …, 1` - O(n²) worst case
//! - **Knuth**: `…, 40, 13, 4, 1` - O(n^1.5)
//! - **Sedgewick**: `…, 109, 77, 23, 19, 8, 1` - O(n^4/3)
//!
//! ```
//! use gapsort::{shell_sort, GapSequence};
//!
//! let mut data = vec![23, 12, 1, 8, 34, 54, 2, 3];
//! shell_sort::sort(&mut data, GapSequence::Knuth);
//! assert_eq!(data, vec![1, 2, 3, 8, 12, 23, 34, 54]);
//! ```

pub mod app;
pub mod benchmark;
pub mod cli;
pub mod error;
pub mod gap_sequence;
pub mod input;
pub mod int_buffer;
pub mod logging;
pub mod report;
pub mod shell_sort;

pub use error::{Result, ShellSortError};
pub use gap_sequence::GapSequence;
pub use int_buffer::IntBuffer;
