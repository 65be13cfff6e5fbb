use tracing::trace;

/// Exchange sort; stops after the first pass that makes no exchange.
pub fn bubble_sort<T: Ord>(data: &mut [T]) {
    let len = data.len();
    for pass in 0..len.saturating_sub(1) {
        let mut swapped = false;
        // The last `pass` elements already hold the largest values.
        for j in 0..len - 1 - pass {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                swapped = true;
            }
        }
        trace!(pass, swapped, "bubble pass");
        if !swapped {
            break;
        }
    }
}
