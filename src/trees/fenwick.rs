//! Fenwick trees. This is a light-weight alternative to a segment tree that stores all its
//! values in one flat allocation, and only supports adding to single elements.
//!
//! See [`FenwickTree`]

use std::ops::RangeBounds;

use super::{check_inclusive, check_index, resolve_range};
use crate::data::{CommutativeSummary, Group};
use crate::error::{RangeError, Result};

/// The lowest set bit of `i`.
#[inline]
fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

/// A fenwick tree (binary indexed tree) over a fixed number of elements.
///
/// Updates add a delta to one element. Queries return sums of prefixes or of ranges.
/// As a design decision, it does not store the elements themselves, only the partial sums.
///
/// ```
/// use range_trees::FenwickTree;
///
/// let mut tree = FenwickTree::<i64>::new(5).unwrap();
/// tree.update(1, 3).unwrap();
/// tree.update(3, 4).unwrap();
/// assert_eq!(tree.query_range(1, 3), Ok(7));
/// assert_eq!(tree.query(0), Ok(0));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct FenwickTree<S> {
    /// 1-based. `tree[i]` holds the sum of the elements in `(i - lowbit(i), i]`.
    /// `tree[0]` is unused.
    tree: Vec<S>,
}

impl<S> FenwickTree<S> {
    /// The number of logical elements
    pub fn len(&self) -> usize {
        self.tree.len() - 1
    }

    /// Always false, since empty trees can't be constructed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: CommutativeSummary> FenwickTree<S> {
    /// Create a tree of `size` zeroes.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(RangeError::EmptyInput);
        }
        log::debug!("new fenwick tree of size {}", size);
        Ok(FenwickTree {
            tree: vec![S::default(); size + 1],
        })
    }

    /// Build a tree holding `data`.
    /// O(N), by pushing every slot's sum into its parent once.
    pub fn from_slice(data: &[S]) -> Result<Self> {
        if data.is_empty() {
            return Err(RangeError::EmptyInput);
        }
        log::debug!("building fenwick tree over {} elements", data.len());

        let size = data.len();
        let mut tree = Vec::with_capacity(size + 1);
        tree.push(S::default());
        tree.extend_from_slice(data);
        for i in 1..=size {
            let parent = i + lowbit(i);
            if parent <= size {
                tree[parent] = tree[parent] + tree[i];
            }
        }
        Ok(FenwickTree { tree })
    }

    /// Adds `delta` to the element at `index`.
    /// O(log N)
    pub fn update(&mut self, index: usize, delta: S) -> Result<()> {
        check_index(index, self.len())?;
        log::trace!("fenwick update at {}", index);

        let mut i = index + 1;
        while i <= self.len() {
            self.tree[i] = self.tree[i] + delta;
            i += lowbit(i);
        }
        Ok(())
    }

    /// The sum of the elements in `[0, index]`.
    /// O(log N)
    pub fn query(&self, index: usize) -> Result<S> {
        check_index(index, self.len())?;
        Ok(self.prefix(index + 1))
    }

    /// The sum of the first `count` elements. `sum_prefix(0)` is zero.
    /// O(log N)
    pub fn sum_prefix(&self, count: usize) -> Result<S> {
        if count > self.len() {
            return Err(RangeError::OutOfRange {
                index: count - 1,
                len: self.len(),
            });
        }
        Ok(self.prefix(count))
    }

    // `count` must be at most `self.len()`.
    fn prefix(&self, count: usize) -> S {
        let mut result = S::default();
        let mut i = count;
        while i > 0 {
            result = result + self.tree[i];
            i -= lowbit(i);
        }
        result
    }
}

/// impl block for the methods that need subtraction
impl<S: Group> FenwickTree<S> {
    /// The sum of the elements in `[l, r]`.
    /// O(log N)
    pub fn query_range(&self, l: usize, r: usize) -> Result<S> {
        check_inclusive(l, r, self.len())?;
        let total = self.prefix(r + 1);
        if l == 0 {
            Ok(total)
        } else {
            Ok(total - self.prefix(l))
        }
    }

    /// The sum of the elements in `range`. Empty ranges sum to zero.
    /// O(log N)
    pub fn sum<R: RangeBounds<usize>>(&self, range: R) -> Result<S> {
        let range = resolve_range(range, self.len())?;
        Ok(self.prefix(range.end) - self.prefix(range.start))
    }

    /// The element at `index`.
    /// O(log N)
    pub fn get(&self, index: usize) -> Result<S> {
        self.query_range(index, index)
    }

    /// Sets the element at `index` to be `value`.
    /// O(log N)
    pub fn set(&mut self, index: usize, value: S) -> Result<()> {
        let prev = self.get(index)?;
        self.update(index, value - prev)
    }
}
