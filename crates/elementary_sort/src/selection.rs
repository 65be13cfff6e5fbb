use tracing::trace;

/// Repeatedly swaps the minimum of the unsorted suffix into place.
///
/// Not stable. Performs at most `len - 1` swaps.
pub fn selection_sort<T: Ord>(data: &mut [T]) {
    let len = data.len();
    for i in 0..len.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..len {
            if data[j] < data[min] {
                min = j;
            }
        }
        if min != i {
            data.swap(i, min);
        }
        trace!(i, min, "selection step");
    }
}
