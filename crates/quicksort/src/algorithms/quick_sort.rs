use tracing::trace;

use crate::SortContext;

use super::common::PartitionScheme;

pub fn sort_hole_filling<T: Ord + Copy>(data: &mut [T], _ctx: &mut SortContext) {
    quick_sort(data, PartitionScheme::HoleFilling);
}

pub fn sort_two_pointer<T: Ord + Copy>(data: &mut [T], _ctx: &mut SortContext) {
    quick_sort(data, PartitionScheme::TwoPointer);
}

pub fn quick_sort<T: Ord + Copy>(data: &mut [T], scheme: PartitionScheme) {
    quick_sort_recursive(data, scheme, 0);
}

// Recurses into the smaller side and loops on the larger one, so the stack
// stays O(log n) even when every pivot lands at an end.
fn quick_sort_recursive<T: Ord + Copy>(
    mut data: &mut [T],
    scheme: PartitionScheme,
    mut depth: usize,
) {
    while data.len() > 1 {
        let pivot = scheme.partition(data);
        trace!(depth, len = data.len(), pivot, scheme = scheme.name(), "partitioned");

        let (left, rest) = data.split_at_mut(pivot);
        let (_, right) = rest.split_at_mut(1);
        depth += 1;

        if left.len() < right.len() {
            quick_sort_recursive(left, scheme, depth);
            data = right;
        } else {
            quick_sort_recursive(right, scheme, depth);
            data = left;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_demo_input_with_both_schemes() {
        for scheme in [PartitionScheme::HoleFilling, PartitionScheme::TwoPointer] {
            let mut data = [5, 3, 1, 9, 2, 8, 4, 7, 6];
            quick_sort(&mut data, scheme);
            assert_eq!(data, [1, 2, 3, 4, 5, 6, 7, 8, 9], "scheme={}", scheme.name());
        }
    }

    #[test]
    fn sorted_input_does_not_exhaust_the_stack() {
        // Every pivot is the minimum, the textbook O(n) depth case.
        let mut data: Vec<u32> = (0..20_000).collect();
        quick_sort(&mut data, PartitionScheme::TwoPointer);
        assert!(data.is_sorted());
    }

    #[test]
    fn sorts_non_integer_keys() {
        let mut words = ["zebra", "apple", "mango", "banana", "apple"];
        quick_sort(&mut words, PartitionScheme::HoleFilling);
        assert_eq!(words, ["apple", "apple", "banana", "mango", "zebra"]);

        let mut chars = ['d', 'a', 'c', 'b', 'e'];
        quick_sort(&mut chars, PartitionScheme::TwoPointer);
        assert_eq!(chars, ['a', 'b', 'c', 'd', 'e']);
    }
}
