use rand::Rng;
use tracing::trace;

use crate::SortContext;

use super::common;

pub fn sort<T: Ord + Copy>(data: &mut [T], ctx: &mut SortContext) {
    randomized_quick_sort(data, &mut ctx.rng);
}

pub fn randomized_quick_sort<T: Ord + Copy, R: Rng + ?Sized>(data: &mut [T], rng: &mut R) {
    randomized_quick_sort_recursive(data, rng, 0);
}

fn randomized_quick_sort_recursive<T: Ord + Copy, R: Rng + ?Sized>(
    mut data: &mut [T],
    rng: &mut R,
    mut depth: usize,
) {
    while data.len() > 1 {
        let k = rng.random_range(0..data.len());
        data.swap(0, k);

        let pivot = common::partition_hole_filling(data);
        trace!(depth, len = data.len(), pivot, "partitioned around random pivot");

        let (left, rest) = data.split_at_mut(pivot);
        let (_, right) = rest.split_at_mut(1);
        depth += 1;

        if left.len() < right.len() {
            randomized_quick_sort_recursive(left, rng, depth);
            data = right;
        } else {
            randomized_quick_sort_recursive(right, rng, depth);
            data = left;
        }
    }
}
