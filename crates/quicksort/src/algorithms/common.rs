use std::cmp::Ordering;

/// Two-way partition schemes accepted by the recursive driver.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PartitionScheme {
    /// Caches the pivot and fills the vacated slot from alternating ends.
    HoleFilling,
    /// Lomuto: grows a `<= pivot` prefix with exchanges.
    TwoPointer,
}

impl PartitionScheme {
    pub fn name(self) -> &'static str {
        match self {
            PartitionScheme::HoleFilling => "hole_filling",
            PartitionScheme::TwoPointer => "two_pointer",
        }
    }

    #[inline]
    pub(crate) fn partition<T: Ord + Copy>(self, data: &mut [T]) -> usize {
        match self {
            PartitionScheme::HoleFilling => partition_hole_filling(data),
            PartitionScheme::TwoPointer => partition_two_pointer(data),
        }
    }
}

/// Partitions around `data[0]` and returns the pivot's final index.
///
/// The pivot value lives in a local while its slot acts as a hole: the right
/// cursor moves the first smaller element it meets into the hole, which moves
/// the hole right, then the left cursor moves the first larger element into
/// the new hole on the right. When the cursors meet, the pivot fills the last
/// hole. Elements are overwritten, never exchanged, so at most `len - 1`
/// writes happen before the final one.
#[inline]
pub fn partition_hole_filling<T: Ord + Copy>(data: &mut [T]) -> usize {
    debug_assert!(!data.is_empty());

    let pivot = data[0];
    let mut i = 0usize;
    let mut j = data.len() - 1;

    while i < j {
        while i < j && data[j] >= pivot {
            j -= 1;
        }
        if i < j {
            data[i] = data[j];
            i += 1;
        }

        while i < j && data[i] <= pivot {
            i += 1;
        }
        if i < j {
            data[j] = data[i];
            j -= 1;
        }
    }

    data[i] = pivot;
    i
}

/// Lomuto partition around `data[0]`; returns the pivot's final index.
///
/// `data[1..=i]` holds the elements `<= pivot` seen so far.
#[inline]
pub fn partition_two_pointer<T: Ord + Copy>(data: &mut [T]) -> usize {
    debug_assert!(!data.is_empty());

    let pivot = data[0];
    let mut i = 0usize;
    for j in 1..data.len() {
        if data[j] <= pivot {
            i += 1;
            data.swap(i, j);
        }
    }

    data.swap(0, i);
    i
}

/// Dutch-flag partition around `data[0]`.
///
/// Returns `(lt, gt)` with `data[..lt] < pivot`, `data[lt..gt] == pivot` and
/// `data[gt..] > pivot`. Each element after the first is compared once.
#[inline]
pub fn partition_3way<T: Ord + Copy>(data: &mut [T]) -> (usize, usize) {
    debug_assert!(!data.is_empty());

    let pivot = data[0];
    let mut lt = 0usize;
    let mut i = 1usize;
    let mut gt = data.len();

    while i < gt {
        match data[i].cmp(&pivot) {
            Ordering::Less => {
                data.swap(i, lt);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                // The element swapped in from `gt` is unexamined, so `i` stays.
                gt -= 1;
                data.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }

    (lt, gt)
}
