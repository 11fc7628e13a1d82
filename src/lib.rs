//! Range aggregation trees over a fixed size mutable array.
//!
//! * [`FenwickTree`]: add to one element, sum prefixes and ranges.
//! * [`SegmentTree`]: set one element, sum ranges.
//! * [`LazySegmentTree`]: add to every element of a range, sum ranges.
//!
//! All indices are 0-based logical indices, and `l, r` ranges are inclusive.
//! Every operation checks its arguments and returns a [`RangeError`] instead of panicking.

pub mod data;
pub mod error;
pub mod trees;

pub use data::{CommutativeSummary, Group, Scale};
pub use error::{RangeError, Result};
pub use trees::fenwick::FenwickTree;
pub use trees::lazy_segment::LazySegmentTree;
pub use trees::resolve_range;
pub use trees::segment::SegmentTree;
