//! This module contains the trees themselves, and the bookkeeping they share:
//! bound checking of indices and ranges, and the implicit heap layout of the segment trees.

pub mod fenwick;
pub mod lazy_segment;
pub mod segment;

use std::ops::{Bound, Range, RangeBounds};

use crate::error::{RangeError, Result};

/// A node of an array-backed segment tree, together with the segment it covers.
///
/// The segment is not stored in the tree. It is determined by walking down from [`Node::root`],
/// so every recursion carries its node around by value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct Node {
    /// Position in the backing array. The children of `k` are `2k + 1` and `2k + 2`.
    pub index: usize,
    /// First logical index covered, inclusive.
    pub start: usize,
    /// Last logical index covered, inclusive.
    pub end: usize,
}

impl Node {
    /// The root of a tree over `len` elements. `len` must be positive.
    pub fn root(len: usize) -> Self {
        Node {
            index: 0,
            start: 0,
            end: len - 1,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.start == self.end
    }

    /// The number of logical elements under this node.
    pub fn width(&self) -> usize {
        self.end - self.start + 1
    }

    fn mid(&self) -> usize {
        self.start + (self.end - self.start) / 2
    }

    pub fn left(&self) -> Self {
        Node {
            index: 2 * self.index + 1,
            start: self.start,
            end: self.mid(),
        }
    }

    pub fn right(&self) -> Self {
        Node {
            index: 2 * self.index + 2,
            start: self.mid() + 1,
            end: self.end,
        }
    }

    /// Whether `[self.start, self.end]` and `[l, r]` are disjoint.
    pub fn is_disjoint(&self, l: usize, r: usize) -> bool {
        r < self.start || self.end < l
    }

    /// Whether `[self.start, self.end]` lies inside `[l, r]`.
    pub fn is_inside(&self, l: usize, r: usize) -> bool {
        l <= self.start && self.end <= r
    }
}

/// Backing array length for a segment tree over `len` elements.
/// `4 * len` is always enough for the recursive halving layout.
pub(crate) fn heap_size(len: usize) -> usize {
    4 * len
}

/// Checks that `index` is a valid position in an array of length `len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        log::debug!("rejected index {} for length {}", index, len);
        Err(RangeError::OutOfRange { index, len })
    }
}

/// Checks the inclusive range `[l, r]` against an array of length `len`.
pub(crate) fn check_inclusive(l: usize, r: usize, len: usize) -> Result<()> {
    if l > r {
        log::debug!("rejected inverted range [{}, {}]", l, r);
        return Err(RangeError::InvalidRange { start: l, end: r });
    }
    check_index(r, len)
}

/// Turns any [`RangeBounds`] into a half open range that fits in an array of length `len`.
///
/// The resulting range may be empty.
pub fn resolve_range<R: RangeBounds<usize>>(range: R, len: usize) -> Result<Range<usize>> {
    // a bound one past `usize::MAX` can't be inside any array
    let past_max = || {
        log::debug!("rejected range bound past usize::MAX for length {}", len);
        RangeError::OutOfRange {
            index: usize::MAX,
            len,
        }
    };
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.checked_add(1).ok_or_else(past_max)?,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.checked_add(1).ok_or_else(past_max)?,
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };
    if start > end {
        log::debug!("rejected inverted range {}..{}", start, end);
        return Err(RangeError::InvalidRange { start, end });
    }
    if end > len {
        log::debug!("rejected range {}..{} for length {}", start, end, len);
        return Err(RangeError::OutOfRange { index: end - 1, len });
    }
    Ok(start..end)
}
