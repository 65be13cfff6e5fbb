//! Searching a slice for a target value.
//!
//! The binary searches require ascending input and return the index of some
//! element equal to the target; with duplicates any of them may be reported.

use std::cmp::Ordering;

use tracing::trace;

pub fn binary_search_iterative<T: Ord>(data: &[T], target: &T) -> Option<usize> {
    // Half-open window `low..high`.
    let mut low = 0usize;
    let mut high = data.len();
    while low < high {
        let mid = low + (high - low) / 2;
        trace!(low, high, mid, "probe");
        match data[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}

pub fn binary_search_recursive<T: Ord>(data: &[T], target: &T) -> Option<usize> {
    search_window(data, target, 0, data.len())
}

fn search_window<T: Ord>(data: &[T], target: &T, low: usize, high: usize) -> Option<usize> {
    if low >= high {
        return None;
    }
    let mid = low + (high - low) / 2;
    trace!(low, high, mid, "probe");
    match data[mid].cmp(target) {
        Ordering::Equal => Some(mid),
        Ordering::Less => search_window(data, target, mid + 1, high),
        Ordering::Greater => search_window(data, target, low, mid),
    }
}

/// First index holding `target`; the input needs no ordering.
pub fn linear_search<T: PartialEq>(data: &[T], target: &T) -> Option<usize> {
    data.iter().position(|x| x == target)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const ODDS: [i32; 13] = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23, 25];

    #[test]
    fn known_cases() {
        let cases = [(7, Some(3)), (1, Some(0)), (25, Some(12)), (10, None), (13, Some(6))];
        for (target, expected) in cases {
            assert_eq!(binary_search_iterative(&ODDS, &target), expected, "target={target}");
            assert_eq!(binary_search_recursive(&ODDS, &target), expected, "target={target}");
            assert_eq!(linear_search(&ODDS, &target), expected, "target={target}");
        }
    }

    #[test]
    fn empty_and_out_of_range() {
        let empty: [i32; 0] = [];
        assert_eq!(binary_search_iterative(&empty, &1), None);
        assert_eq!(binary_search_recursive(&empty, &1), None);
        assert_eq!(linear_search(&empty, &1), None);

        assert_eq!(binary_search_iterative(&ODDS, &0), None);
        assert_eq!(binary_search_recursive(&ODDS, &26), None);
    }

    #[test]
    fn extreme_values_do_not_overflow_the_midpoint() {
        let data = [u64::MIN, 1, u64::MAX - 1, u64::MAX];
        assert_eq!(binary_search_iterative(&data, &u64::MAX), Some(3));
        assert_eq!(binary_search_recursive(&data, &u64::MIN), Some(0));
    }

    #[test]
    fn duplicates_report_a_matching_index() {
        let data = [1, 2, 2, 2, 2, 3];
        let i = binary_search_iterative(&data, &2).unwrap();
        let r = binary_search_recursive(&data, &2).unwrap();
        assert_eq!((data[i], data[r]), (2, 2));
        assert_eq!(linear_search(&data, &2), Some(1));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn agrees_with_std(
            mut data in prop::collection::vec(-500i32..500, 0..200),
            target in -520i32..520,
        ) {
            data.sort();
            let expected = data.binary_search(&target).is_ok();
            for found in [
                binary_search_iterative(&data, &target),
                binary_search_recursive(&data, &target),
            ] {
                prop_assert_eq!(found.is_some(), expected);
                if let Some(i) = found {
                    prop_assert_eq!(data[i], target);
                }
            }
        }
    }
}
