//! Implementations of the summary traits for the primitive numbers.

use super::*;

macro_rules! impl_summary {
    ($($t:ty),* $(,)?) => {
        $(
            impl CommutativeSummary for $t {}

            impl Group for $t {}
        )*
    };
}

// A width that doesn't fit in the element type is rejected the same way the
// repeated sum would overflow: a panic with debug assertions, wrapping without.
macro_rules! impl_scale_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scale for $t {
                #[inline]
                fn scale(self, count: usize) -> Self {
                    match <$t>::try_from(count) {
                        Ok(count) => self * count,
                        Err(_) if self == 0 => 0,
                        Err(_) => {
                            if cfg!(debug_assertions) {
                                panic!("scaling by {} overflows {}", count, stringify!($t));
                            }
                            self.wrapping_mul(count as $t)
                        }
                    }
                }
            }
        )*
    };
}

macro_rules! impl_scale_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scale for $t {
                #[inline]
                fn scale(self, count: usize) -> Self {
                    self * (count as $t)
                }
            }
        )*
    };
}

impl_summary!(i8, i16, i32, i64, i128, isize);
impl_summary!(u8, u16, u32, u64, u128, usize);
impl_summary!(f32, f64);

impl_scale_int!(i8, i16, i32, i64, i128, isize);
impl_scale_int!(u8, u16, u32, u64, u128, usize);
impl_scale_float!(f32, f64);
