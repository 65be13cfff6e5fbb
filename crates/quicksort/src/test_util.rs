use std::cell::Cell;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Element that counts every comparison made against it.
#[derive(Clone, Copy, Debug)]
pub struct Counted<'a> {
    pub value: i32,
    comparisons: &'a Cell<usize>,
}

impl<'a> Counted<'a> {
    pub fn new(value: i32, comparisons: &'a Cell<usize>) -> Self {
        Self { value, comparisons }
    }
}

impl PartialEq for Counted<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Counted<'_> {}

impl PartialOrd for Counted<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Counted<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.comparisons.set(self.comparisons.get() + 1);
        self.value.cmp(&other.value)
    }
}

pub fn assert_partitioned<T: Ord + Debug>(data: &[T], pivot: usize) {
    let p = &data[pivot];
    assert!(
        data[..pivot].iter().all(|x| x <= p),
        "left side above pivot {p:?}: {data:?}"
    );
    assert!(
        data[pivot + 1..].iter().all(|x| x >= p),
        "right side below pivot {p:?}: {data:?}"
    );
}

pub fn assert_same_multiset<T: Eq + Hash + Debug>(actual: &[T], expected: &[T]) {
    fn counts<T: Eq + Hash>(data: &[T]) -> HashMap<&T, usize> {
        let mut counts = HashMap::new();
        for x in data {
            *counts.entry(x).or_insert(0) += 1;
        }
        counts
    }

    assert_eq!(actual.len(), expected.len());
    assert_eq!(counts(actual), counts(expected), "{actual:?} vs {expected:?}");
}
