use std::ops::{Bound, Range, RangeBounds};

use thiserror::Error;

/// Reasons a requested index range cannot be sorted or partitioned.
///
/// Every error is reported before the sequence is touched.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum RangeError {
    #[error("range start {start} is past range end {end}")]
    StartAfterEnd { start: usize, end: usize },
    #[error("range end {end} is out of bounds for a sequence of length {len}")]
    OutOfBounds { end: usize, len: usize },
    #[error("cannot partition the empty range starting at {start}")]
    EmptyRange { start: usize },
}

/// Resolves `range` against a sequence of length `len` into a half-open range.
pub(crate) fn resolve<R: RangeBounds<usize>>(
    range: R,
    len: usize,
) -> Result<Range<usize>, RangeError> {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e
            .checked_add(1)
            .ok_or(RangeError::OutOfBounds { end: e, len })?,
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };

    if start > end {
        return Err(RangeError::StartAfterEnd { start, end });
    }
    if end > len {
        return Err(RangeError::OutOfBounds { end, len });
    }
    Ok(start..end)
}

/// Like [`resolve`], but rejects empty ranges.
pub(crate) fn resolve_non_empty<R: RangeBounds<usize>>(
    range: R,
    len: usize,
) -> Result<Range<usize>, RangeError> {
    let range = resolve(range, len)?;
    if range.is_empty() {
        return Err(RangeError::EmptyRange { start: range.start });
    }
    Ok(range)
}
