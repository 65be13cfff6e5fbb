use tracing::trace;

use crate::SortContext;

use super::common;

pub fn sort<T: Ord + Copy>(data: &mut [T], _ctx: &mut SortContext) {
    quick_sort_3way(data);
}

pub fn quick_sort_3way<T: Ord + Copy>(data: &mut [T]) {
    quick_sort_3way_recursive(data, 0);
}

fn quick_sort_3way_recursive<T: Ord + Copy>(mut data: &mut [T], mut depth: usize) {
    while data.len() > 1 {
        let (lt, gt) = common::partition_3way(data);
        trace!(depth, len = data.len(), lt, gt, "partitioned three ways");

        // The equal zone is final and never revisited.
        let (left, rest) = data.split_at_mut(lt);
        let (_, right) = rest.split_at_mut(gt - lt);
        depth += 1;

        if left.len() < right.len() {
            quick_sort_3way_recursive(left, depth);
            data = right;
        } else {
            quick_sort_3way_recursive(right, depth);
            data = left;
        }
    }
}
