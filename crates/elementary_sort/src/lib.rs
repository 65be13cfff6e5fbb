//! Quadratic comparison sorts, kept as baselines for the quicksort variants.

mod bubble;
mod insertion;
mod selection;

use tracing::debug;

pub use bubble::bubble_sort;
pub use insertion::{binary_insertion_sort, insertion_sort};
pub use selection::selection_sort;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ElementarySort {
    BubbleSort,
    InsertionSort,
    BinaryInsertionSort,
    SelectionSort,
}

pub const ALL_SORTS: [ElementarySort; 4] = [
    ElementarySort::BubbleSort,
    ElementarySort::InsertionSort,
    ElementarySort::BinaryInsertionSort,
    ElementarySort::SelectionSort,
];

pub fn all_sorts() -> &'static [ElementarySort] {
    &ALL_SORTS
}

pub fn sort_name(algo: ElementarySort) -> &'static str {
    match algo {
        ElementarySort::BubbleSort => "bubble_sort",
        ElementarySort::InsertionSort => "insertion_sort",
        ElementarySort::BinaryInsertionSort => "binary_insertion_sort",
        ElementarySort::SelectionSort => "selection_sort",
    }
}

pub fn is_stable(algo: ElementarySort) -> bool {
    !matches!(algo, ElementarySort::SelectionSort)
}

pub fn sort_with<T: Ord + Copy>(algo: ElementarySort, data: &mut [T]) {
    debug!(len = data.len(), algo = sort_name(algo), "sort");
    match algo {
        ElementarySort::BubbleSort => bubble_sort(data),
        ElementarySort::InsertionSort => insertion_sort(data),
        ElementarySort::BinaryInsertionSort => binary_insertion_sort(data),
        ElementarySort::SelectionSort => selection_sort(data),
    }
}
