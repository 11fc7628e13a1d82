//! Segment trees with lazy propagation.
//!
//! Adding a value to every element of a range would touch O(N) leaves if done eagerly.
//! Instead, a range update stops at the O(log N) nodes whose segments lie fully inside the
//! range, fixes their sums, and leaves a pending delta in a parallel `lazy` array for their
//! children. The pending delta is pushed one level down whenever a later update or query
//! passes through the node. See [`LazySegmentTree`].

use std::ops::RangeBounds;

use super::{check_inclusive, check_index, heap_size, resolve_range, Node};
use crate::data::Scale;
use crate::error::{RangeError, Result};

/// A segment tree over a fixed array, supporting adding a value to every element
/// of a range, and summing arbitrary ranges, both in O(log N).
///
/// Queries take `&mut self`, since they push pending updates down the tree as they go.
///
/// ```
/// use range_trees::LazySegmentTree;
///
/// let mut tree = LazySegmentTree::new(&[1, 2, 3, 4, 5]).unwrap();
/// tree.update_range(1, 3, 2).unwrap();
/// assert_eq!(tree.query(1, 3), Ok(15));
/// tree.update_range(2, 4, 3).unwrap();
/// assert_eq!(tree.query(1, 3), Ok(21));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct LazySegmentTree<S> {
    n: usize,
    tree: Vec<S>,
    /// `lazy[k]` is a per-element delta that applies to the whole segment of node `k`
    /// but hasn't been added to `tree[k]` yet.
    lazy: Vec<S>,
}

impl<S> LazySegmentTree<S> {
    /// The number of logical elements
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false, since empty trees can't be constructed.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
}

impl<S: Scale> LazySegmentTree<S> {
    /// Builds a tree holding `data`, with nothing pending.
    /// O(N)
    pub fn new(data: &[S]) -> Result<Self> {
        if data.is_empty() {
            return Err(RangeError::EmptyInput);
        }
        log::debug!("building lazy segment tree over {} elements", data.len());

        let size = heap_size(data.len());
        let mut res = LazySegmentTree {
            n: data.len(),
            tree: vec![S::default(); size],
            lazy: vec![S::default(); size],
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
            self.tree[node.index] = self.tree[left.index] + self.tree[right.index];
        }
    }

    /// Marks the whole segment of `node` as having `delta` added to every element.
    /// `tree[node]` is fixed immediately, the children only get a pending delta.
    fn apply(&mut self, node: Node, delta: S) {
        self.tree[node.index] = self.tree[node.index] + delta.scale(node.width());
        if !node.is_leaf() {
            let (left, right) = (node.left().index, node.right().index);
            self.lazy[left] = self.lazy[left] + delta;
            self.lazy[right] = self.lazy[right] + delta;
        }
    }

    /// Settles the pending delta of `node`: after this, `tree[node]` is exact
    /// and `lazy[node]` is zero. Must run before a node is read or recursed into.
    fn propagate(&mut self, node: Node) {
        let pending = self.lazy[node.index];
        if !pending.is_zero() {
            self.lazy[node.index] = S::default();
            self.apply(node, pending);
        }
    }

    /// Adds `value` to every element in `[l, r]`.
    /// O(log N)
    pub fn update_range(&mut self, l: usize, r: usize, value: S) -> Result<()> {
        check_inclusive(l, r, self.n)?;
        log::trace!("lazy segment tree add on [{}, {}]", l, r);
        self.update_rec(l, r, value, Node::root(self.n));
        Ok(())
    }

    fn update_rec(&mut self, l: usize, r: usize, value: S, node: Node) {
        self.propagate(node);

        if node.is_disjoint(l, r) {
            return;
        }
        if node.is_inside(l, r) {
            self.apply(node, value);
            return;
        }
        let (left, right) = (node.left(), node.right());
        self.update_rec(l, r, value, left);
        self.update_rec(l, r, value, right);
        // both children were propagated by the recursion, so their sums are exact
        self.tree[node.index] = self.tree[left.index] + self.tree[right.index];
    }

    /// Adds `delta` to the element at `index`.
    /// O(log N)
    pub fn add(&mut self, index: usize, delta: S) -> Result<()> {
        check_index(index, self.n)?;
        self.update_range(index, index, delta)
    }

    /// The sum of the elements in `[l, r]`.
    /// O(log N)
    pub fn query(&mut self, l: usize, r: usize) -> Result<S> {
        check_inclusive(l, r, self.n)?;
        log::trace!("lazy segment tree query on [{}, {}]", l, r);
        Ok(self.query_rec(l, r, Node::root(self.n)))
    }

    fn query_rec(&mut self, l: usize, r: usize, node: Node) -> S {
        self.propagate(node);

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
    pub fn sum<R: RangeBounds<usize>>(&mut self, range: R) -> Result<S> {
        let range = resolve_range(range, self.n)?;
        if range.is_empty() {
            return Ok(S::default());
        }
        self.query(range.start, range.end - 1)
    }

    /// The element at `index`.
    /// O(log N)
    pub fn get(&mut self, index: usize) -> Result<S> {
        self.query(index, index)
    }

    /// The sum of all the elements.
    /// O(1)
    pub fn total(&mut self) -> S {
        let root = Node::root(self.n);
        self.propagate(root);
        self.tree[root.index]
    }

    /// Collects the current elements, settling every pending delta on the way.
    /// O(N)
    pub fn to_vec(&mut self) -> Vec<S> {
        let mut res = Vec::with_capacity(self.n);
        self.collect_leaves(Node::root(self.n), &mut res);
        res
    }

    fn collect_leaves(&mut self, node: Node, out: &mut Vec<S>) {
        self.propagate(node);
        if node.is_leaf() {
            out.push(self.tree[node.index]);
        } else {
            self.collect_leaves(node.left(), out);
            self.collect_leaves(node.right(), out);
        }
    }
}
