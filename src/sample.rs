//! Numeric sample types accepted by the accumulators
//!
//! [`Sample`] combines the `num-traits` bounds the accumulator arithmetic
//! needs with a total order, so that floats (including NaN) can be sorted
//! the same way as integers.

use core::cmp::Ordering;
use core::fmt::Debug;

use num_traits::{Bounded, ToPrimitive, Zero};

/// A numeric value that can be fed to an [`Accumulator`](crate::Accumulator)
///
/// Implemented for every primitive integer and float type.
pub trait Sample: Copy + Debug + PartialOrd + Zero + Bounded + ToPrimitive {
    /// Total order used for the order statistics
    ///
    /// Integers use [`Ord::cmp`]; floats use IEEE 754 `totalOrder`
    /// (`f64::total_cmp`), which places negative NaN first and positive
    /// NaN last.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Add `other` to a running total without overflowing
    ///
    /// Integers saturate at the bounds of the type; the flag is true when
    /// the result was clamped. Floats use plain `+` and never report
    /// clamping (they overflow to infinity).
    fn accumulate(self, other: Self) -> (Self, bool);

    /// Widen to `f64` for the moment computations
    #[inline]
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

macro_rules! impl_sample_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sample for $t {
                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }

                #[inline]
                fn accumulate(self, other: Self) -> (Self, bool) {
                    match self.checked_add(other) {
                        Some(total) => (total, false),
                        None => (self.saturating_add(other), true),
                    }
                }
            }
        )*
    };
}

macro_rules! impl_sample_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sample for $t {
                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    <$t>::total_cmp(self, other)
                }

                #[inline]
                fn accumulate(self, other: Self) -> (Self, bool) {
                    (self + other, false)
                }
            }
        )*
    };
}

impl_sample_ord!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_sample_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_order() {
        assert_eq!(Sample::total_cmp(&-3i32, &2), Ordering::Less);
        assert_eq!(Sample::total_cmp(&7u8, &7), Ordering::Equal);
        assert_eq!(Sample::total_cmp(&u64::MAX, &0), Ordering::Greater);
    }

    #[test]
    fn test_float_order_handles_nan() {
        assert_eq!(Sample::total_cmp(&1.0f64, &f64::NAN), Ordering::Less);
        assert_eq!(Sample::total_cmp(&-0.0f64, &0.0), Ordering::Less);
        assert_eq!(Sample::total_cmp(&f32::NEG_INFINITY, &f32::MIN), Ordering::Less);
    }

    #[test]
    fn test_integer_accumulate_saturates() {
        assert_eq!(200u8.accumulate(55), (255, false));
        assert_eq!(200u8.accumulate(100), (255, true));
        assert_eq!(i32::MAX.accumulate(1), (i32::MAX, true));
        assert_eq!(i32::MIN.accumulate(-1), (i32::MIN, true));
        assert_eq!((-5i8).accumulate(3), (-2, false));
    }

    #[test]
    fn test_float_accumulate_never_clamps() {
        assert_eq!(1.5f64.accumulate(2.25), (3.75, false));
        assert_eq!(f32::MAX.accumulate(f32::MAX), (f32::INFINITY, false));
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(5i32.as_f64(), 5.0);
        assert_eq!(255u8.as_f64(), 255.0);
        assert_eq!(1.5f32.as_f64(), 1.5);
        assert!(f64::NAN.as_f64().is_nan());
    }

    #[test]
    fn test_min_sentinel_is_most_negative() {
        assert_eq!(<f64 as Bounded>::min_value(), f64::MIN);
        assert_eq!(<i16 as Bounded>::min_value(), i16::MIN);
        assert_eq!(<u32 as Bounded>::min_value(), 0);
    }
}
