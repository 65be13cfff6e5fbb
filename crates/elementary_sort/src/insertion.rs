use tracing::trace;

/// Shifts each element left past the larger ones before it.
pub fn insertion_sort<T: Ord + Copy>(data: &mut [T]) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 && data[j - 1] > key {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = key;
        trace!(i, inserted_at = j, "insertion step");
    }
}

/// Insertion sort that locates each insertion point by binary search.
///
/// Equal elements keep their order: the search lands after existing equals.
pub fn binary_insertion_sort<T: Ord>(data: &mut [T]) {
    for i in 1..data.len() {
        let (sorted, rest) = data.split_at(i);
        let key = &rest[0];
        let pos = sorted.partition_point(|x| x <= key);
        data[pos..=i].rotate_right(1);
        trace!(i, inserted_at = pos, "binary insertion step");
    }
}
