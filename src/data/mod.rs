//! The values stored inside the trees.
//!
//! All the trees in this crate aggregate with `+`. The traits here describe how much of
//! arithmetic each tree needs from its element type:
//! * [`CommutativeSummary`] for anything that only adds values up.
//! * [`Group`] when a tree needs to take a prefix away from another prefix.
//! * [`Scale`] when a tree needs to apply a per-element delta to a whole segment at once.
//!
//! All three are implemented for the primitive numeric types, see [`basic_data`].

pub mod basic_data;

use std::ops::{Add, Sub};

/// A value that can be summed in any order.
///
/// `Default::default()` must be the zero of the sum: `a + zero == a`.
/// The addition must be associative and commutative.
pub trait CommutativeSummary: Copy + Default + PartialEq + Add<Output = Self> {
    /// Whether this is the empty summary.
    fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// A summary that can also be subtracted.
/// `(a + b) - b == a` must hold.
pub trait Group: CommutativeSummary + Sub<Output = Self> {}

/// A summary that can be multiplied by a count of elements.
///
/// `x.scale(k)` must equal `x + x + ... + x`, `k` times, and `x.scale(0)` must be zero.
/// When that sum overflows, `scale` overflows the same way: for the primitive integers,
/// a count that doesn't fit in the type panics with debug assertions and wraps without.
pub trait Scale: CommutativeSummary {
    fn scale(self, count: usize) -> Self;
}
