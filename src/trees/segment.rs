//! Segment trees with point updates.
//!
//! See [`SegmentTree`]

use std::ops::RangeBounds;

use super::{check_inclusive, check_index, heap_size, resolve_range, Node};
use crate::data::CommutativeSummary;
use crate::error::{RangeError, Result};

/// A segment tree over a fixed array, supporting setting single elements
/// and summing arbitrary ranges, both in O(log N).
///
/// The tree is stored as an implicit binary heap in one allocation: node `k` has
/// children `2k + 1` and `2k + 2`, and every node holds the sum of its segment.
///
/// ```
/// use range_trees::SegmentTree;
///
/// let mut tree = SegmentTree::new(&[1, 2, 3, 4, 5]).unwrap();
/// assert_eq!(tree.query(1, 3), Ok(9));
/// tree.update(2, 6).unwrap();
/// assert_eq!(tree.query(1, 3), Ok(12));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct SegmentTree<S> {
    n: usize,
    tree: Vec<S>,
}

impl<S> SegmentTree<S> {
    /// The number of logical elements
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false, since empty trees can't be constructed.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
}

impl<S: CommutativeSummary> SegmentTree<S> {
    /// Builds a tree holding `data`.
    /// O(N)
    pub fn new(data: &[S]) -> Result<Self> {
        if data.is_empty() {
            return Err(RangeError::EmptyInput);
        }
        log::debug!("building segment tree over {} elements", data.len());

        let mut res = SegmentTree {
            n: data.len(),
            tree: vec![S::default(); heap_size(data.len())],
        };
        res.build(data, Node::root(res.n));
        Ok(res)
    }

    fn build(&mut self, data: &[S], node: Node) {
        if node.is_leaf() {
            self.tree[node.index] = data[node.start];
        } else {
            let (left, right) = (node.left(), node.right());
            self.build(data, left);
            self.build(data, right);
            self.rebuild(node);
        }
    }

    /// Recomputes a node's sum from its children's sums.
    fn rebuild(&mut self, node: Node) {
        self.tree[node.index] = self.tree[node.left().index] + self.tree[node.right().index];
    }

    /// Sets the element at `index` to be `value`.
    /// This is an absolute set, not an addition.
    /// O(log N)
    pub fn update(&mut self, index: usize, value: S) -> Result<()> {
        check_index(index, self.n)?;
        log::trace!("segment tree set at {}", index);
        self.update_rec(index, value, Node::root(self.n));
        Ok(())
    }

    fn update_rec(&mut self, index: usize, value: S, node: Node) {
        if node.is_leaf() {
            self.tree[node.index] = value;
            return;
        }
        let (left, right) = (node.left(), node.right());
        if index <= left.end {
            self.update_rec(index, value, left);
        } else {
            self.update_rec(index, value, right);
        }
        self.rebuild(node);
    }

    /// The sum of the elements in `[l, r]`.
    /// O(log N)
    pub fn query(&self, l: usize, r: usize) -> Result<S> {
        check_inclusive(l, r, self.n)?;
        Ok(self.query_rec(l, r, Node::root(self.n)))
    }

    fn query_rec(&self, l: usize, r: usize, node: Node) -> S {
        if node.is_disjoint(l, r) {
            return S::default();
        }
        if node.is_inside(l, r) {
            return self.tree[node.index];
        }
        self.query_rec(l, r, node.left()) + self.query_rec(l, r, node.right())
    }

    /// The sum of the elements in `range`. Empty ranges sum to zero.
    /// O(log N)
    pub fn sum<R: RangeBounds<usize>>(&self, range: R) -> Result<S> {
        let range = resolve_range(range, self.n)?;
        if range.is_empty() {
            return Ok(S::default());
        }
        Ok(self.query_rec(range.start, range.end - 1, Node::root(self.n)))
    }

    /// The element at `index`.
    /// O(log N)
    pub fn get(&self, index: usize) -> Result<S> {
        self.query(index, index)
    }

    /// The sum of all the elements.
    /// O(1)
    pub fn total(&self) -> S {
        self.tree[0]
    }

    /// Collects the current elements.
    /// O(N)
    pub fn to_vec(&self) -> Vec<S> {
        let mut res = Vec::with_capacity(self.n);
        self.collect_leaves(Node::root(self.n), &mut res);
        res
    }

    fn collect_leaves(&self, node: Node, out: &mut Vec<S>) {
        if node.is_leaf() {
            out.push(self.tree[node.index]);
        } else {
            self.collect_leaves(node.left(), out);
            self.collect_leaves(node.right(), out);
        }
    }
}
