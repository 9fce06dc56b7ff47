//! Property tests for the gap generators and the sort engine.

use gapsort::gap_sequence::{knuth_gaps, sedgewick_gaps, shell_gaps};
use gapsort::shell_sort::{is_sorted, sort, sort_by_name};
use gapsort::GapSequence;
use proptest::prelude::*;

fn any_sequence() -> impl Strategy<Value = GapSequence> {
    prop_oneof![
        Just(GapSequence::Shell),
        Just(GapSequence::Knuth),
        Just(GapSequence::Sedgewick),
    ]
}

proptest! {
    #[test]
    fn sorted_output_is_a_sorted_permutation(
        data in prop::collection::vec(any::<i32>(), 0..500),
        sequence in any_sequence(),
    ) {
        let mut sorted = data.clone();
        sort(&mut sorted, sequence);

        let mut expected = data;
        expected.sort_unstable();
        prop_assert!(is_sorted(&sorted));
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn sorting_sorted_input_is_identity(
        mut data in prop::collection::vec(-1000i32..1000, 0..300),
        sequence in any_sequence(),
    ) {
        data.sort_unstable();
        let mut again = data.clone();
        sort(&mut again, sequence);
        prop_assert_eq!(again, data);
    }

    #[test]
    fn gaps_are_strictly_descending_and_end_in_one(
        n in 0usize..5_000_000,
        sequence in any_sequence(),
    ) {
        let gaps = sequence.gaps(n);
        prop_assert!(gaps.windows(2).all(|w| w[0] > w[1]));
        prop_assert!(gaps.iter().all(|&g| g >= 1 && g < n));
        if n >= 2 {
            prop_assert_eq!(gaps.last().copied(), Some(1));
        } else {
            prop_assert!(gaps.is_empty());
        }
    }

    #[test]
    fn unknown_names_sort_like_shell(
        data in prop::collection::vec(any::<i32>(), 0..200),
        name in "[a-z]{0,12}",
    ) {
        prop_assume!(!["shell", "knuth", "sedgewick"].contains(&name.as_str()));
        prop_assert_eq!(GapSequence::from_name(&name), GapSequence::Shell);

        let mut via_name = data.clone();
        sort_by_name(&mut via_name, &name);
        let mut via_shell = data;
        sort_by_name(&mut via_shell, "shell");
        prop_assert_eq!(via_name, via_shell);
    }
}

#[test]
fn known_gap_sequences() {
    assert_eq!(shell_gaps(8), vec![4, 2, 1]);
    assert_eq!(knuth_gaps(20), vec![13, 4, 1]);
    assert_eq!(sedgewick_gaps(100), vec![77, 23, 19, 8, 1]);
}
