//! In-place quicksort over caller-owned slices.
//!
//! Two interchangeable two-way partition schemes ([`PartitionScheme`]) drive
//! the classic recursive sort. Two variants sit next to it: a three-way
//! partition that settles every copy of the pivot in one pass, and a
//! randomized pivot choice that makes sorted input an average case.
//!
//! Range-taking functions accept any [`RangeBounds<usize>`] and validate it
//! before touching the data; whole-slice functions are infallible.

mod algorithms;
mod error;
#[cfg(test)]
mod test_util;

use std::ops::{Range, RangeBounds};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

pub use algorithms::common::PartitionScheme;
pub use error::RangeError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum QuickSortVariant {
    HoleFilling,
    TwoPointer,
    ThreeWay,
    Randomized,
}

pub const ALL_VARIANTS: [QuickSortVariant; 4] = [
    QuickSortVariant::HoleFilling,
    QuickSortVariant::TwoPointer,
    QuickSortVariant::ThreeWay,
    QuickSortVariant::Randomized,
];

pub fn all_variants() -> &'static [QuickSortVariant] {
    &ALL_VARIANTS
}

pub fn variant_name(variant: QuickSortVariant) -> &'static str {
    match variant {
        QuickSortVariant::HoleFilling => "quick_sort_hole_filling",
        QuickSortVariant::TwoPointer => "quick_sort_two_pointer",
        QuickSortVariant::ThreeWay => "quick_sort_3way",
        QuickSortVariant::Randomized => "quick_sort_randomized",
    }
}

/// State shared across sorts; currently the generator behind
/// [`QuickSortVariant::Randomized`].
#[derive(Clone, Debug)]
pub struct SortContext {
    pub(crate) rng: StdRng,
}

impl Default for SortContext {
    fn default() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl SortContext {
    /// A context whose randomized sorts are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

/// Partitions `data[range]` around its first element.
///
/// Returns the pivot's final index in `data`. Everything left of it within the
/// range is `<=` the pivot and everything right of it is `>=` the pivot.
pub fn partition<T, R>(
    data: &mut [T],
    range: R,
    scheme: PartitionScheme,
) -> Result<usize, RangeError>
where
    T: Ord + Copy,
    R: RangeBounds<usize>,
{
    let range = error::resolve_non_empty(range, data.len())?;
    let start = range.start;
    Ok(start + scheme.partition(&mut data[range]))
}

/// Sorts `data[range]` ascending. Empty and singleton ranges are no-ops.
pub fn sort_range<T, R>(
    data: &mut [T],
    range: R,
    scheme: PartitionScheme,
) -> Result<(), RangeError>
where
    T: Ord + Copy,
    R: RangeBounds<usize>,
{
    let range = error::resolve(range, data.len())?;
    sort(&mut data[range], scheme);
    Ok(())
}

pub fn sort<T: Ord + Copy>(data: &mut [T], scheme: PartitionScheme) {
    debug!(len = data.len(), scheme = scheme.name(), "quick sort");
    algorithms::quick_sort::quick_sort(data, scheme);
}

/// Three-way partitions `data[range]` around its first element.
///
/// Returns the absolute range holding every element equal to the pivot; the
/// elements before it are smaller and those after it are larger.
pub fn partition_3way<T, R>(data: &mut [T], range: R) -> Result<Range<usize>, RangeError>
where
    T: Ord + Copy,
    R: RangeBounds<usize>,
{
    let range = error::resolve_non_empty(range, data.len())?;
    let start = range.start;
    let (lt, gt) = algorithms::common::partition_3way(&mut data[range]);
    Ok(start + lt..start + gt)
}

pub fn sort_3way_range<T, R>(data: &mut [T], range: R) -> Result<(), RangeError>
where
    T: Ord + Copy,
    R: RangeBounds<usize>,
{
    let range = error::resolve(range, data.len())?;
    sort_3way(&mut data[range]);
    Ok(())
}

pub fn sort_3way<T: Ord + Copy>(data: &mut [T]) {
    debug!(len = data.len(), "three-way quick sort");
    algorithms::quick_sort_3way::quick_sort_3way(data);
}

pub fn sort_randomized_range<T, R, G>(
    data: &mut [T],
    range: R,
    rng: &mut G,
) -> Result<(), RangeError>
where
    T: Ord + Copy,
    R: RangeBounds<usize>,
    G: Rng + ?Sized,
{
    let range = error::resolve(range, data.len())?;
    sort_randomized(&mut data[range], rng);
    Ok(())
}

/// Sorts with a pivot drawn uniformly from each range before partitioning.
pub fn sort_randomized<T, G>(data: &mut [T], rng: &mut G)
where
    T: Ord + Copy,
    G: Rng + ?Sized,
{
    debug!(len = data.len(), "randomized quick sort");
    algorithms::randomized_quick_sort::randomized_quick_sort(data, rng);
}

pub fn sort_with<T: Ord + Copy>(variant: QuickSortVariant, data: &mut [T]) {
    let mut ctx = SortContext::default();
    sort_with_ctx(variant, data, &mut ctx);
}

pub fn sort_with_ctx<T: Ord + Copy>(
    variant: QuickSortVariant,
    data: &mut [T],
    ctx: &mut SortContext,
) {
    debug!(len = data.len(), variant = variant_name(variant), "sort");
    match variant {
        QuickSortVariant::HoleFilling => algorithms::quick_sort::sort_hole_filling(data, ctx),
        QuickSortVariant::TwoPointer => algorithms::quick_sort::sort_two_pointer(data, ctx),
        QuickSortVariant::ThreeWay => algorithms::quick_sort_3way::sort(data, ctx),
        QuickSortVariant::Randomized => algorithms::randomized_quick_sort::sort(data, ctx),
    }
}
