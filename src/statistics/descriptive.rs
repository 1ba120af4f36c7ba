//! Exact descriptive statistics over a retained sample set
//!
//! [`Accumulator`] keeps every sample so it can report the exact minimum and
//! median, alongside running sum, maximum, mean and population standard
//! deviation.
//!
//! # Performance Note
//!
//! The order statistics come from a partial sort of the retained samples.
//! Only the smallest `n/2 + 1` values are put in sorted order, and only on
//! the first `min_value()` or `median()` after a write. The sort state lives
//! behind a `RefCell` so these accessors can take `&self`.
//!
//! # Thread Safety
//!
//! `Accumulator` is `Send` but **not `Sync`** due to the internal `RefCell`.
//! Use one accumulator per producer and [`merge`](Sketch::merge) them, or
//! wrap a shared one in `Arc<Mutex<_>>`.

use crate::math;
use crate::sample::Sample;
use crate::statistics::{Moments, Summary};
use crate::traits::{Sketch, StatsError};
use core::cell::RefCell;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Retained samples plus the state of the partial-sort cache.
///
/// Separated from the outer struct so we can wrap it in `RefCell`
/// and sort lazily on read without requiring `&mut self`.
#[derive(Clone, Debug)]
struct SampleBuffer<T> {
    values: Vec<T>,
    /// True until the prefix is sorted for the current contents
    dirty: bool,
}

impl<T: Sample> SampleBuffer<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            dirty: false,
        }
    }

    /// Put the smallest `len/2 + 1` values, in order, at the front.
    fn sort_prefix(&mut self) {
        if !self.dirty {
            return;
        }

        let len = self.values.len();
        let prefix = len / 2 + 1;
        if prefix < len {
            self.values.select_nth_unstable_by(prefix - 1, T::total_cmp);
            self.values[..prefix].sort_unstable_by(T::total_cmp);
        } else {
            self.values.sort_unstable_by(T::total_cmp);
        }
        self.dirty = false;
    }
}

/// Streaming accumulator for count, sum, min, max, mean, median and
/// population standard deviation
///
/// Sum and maximum are kept in the sample type `T`; mean and variance are
/// tracked in `f64` with Welford's algorithm so integer samples lose nothing
/// to integer division.
///
/// # Example
///
/// ```
/// use descstats::Accumulator;
///
/// let mut acc = Accumulator::new();
///
/// for value in [2, 4, 4, 4, 5, 5, 7, 9] {
///     acc.add(value);
/// }
///
/// assert_eq!(acc.count(), 8);
/// assert_eq!(acc.sum_value(), 40);
/// assert_eq!(acc.min_value(), Ok(2));
/// assert_eq!(acc.max_value(), 9);
/// assert_eq!(acc.mean(), 5.0);
/// assert_eq!(acc.median(), 4.5);
/// assert!((acc.standard_deviation() - 2.0).abs() < 1e-12);
/// ```
///
/// # Empty accumulators
///
/// `mean()`, `median()`, `variance()` and `standard_deviation()` return NaN,
/// `max_value()` returns the sentinel `T::min_value()`, and `min_value()`
/// returns [`StatsError::Empty`]. Check [`count()`](Accumulator::count) or use
/// [`min()`](Accumulator::min)/[`max()`](Accumulator::max) for `Option`s.
///
/// # Integer overflow
///
/// The running sum of an integer type saturates at the bounds of `T`
/// instead of overflowing, and [`is_sum_saturated()`](Accumulator::is_sum_saturated)
/// reports it. From then on `mean()` uses the Welford mean, which is kept
/// in `f64` and unaffected by the clamp.
///
/// ```
/// use descstats::Accumulator;
///
/// let acc: Accumulator<u8> = [200, 100].into_iter().collect();
///
/// assert_eq!(acc.sum_value(), u8::MAX);
/// assert!(acc.is_sum_saturated());
/// assert_eq!(acc.mean(), 150.0);
/// ```
#[derive(Clone, Debug)]
pub struct Accumulator<T> {
    /// Running total, clamped at the bounds of `T`
    sum: T,
    /// Set once `sum` has been clamped
    saturated: bool,
    /// Running maximum, `T::min_value()` when empty
    max: T,
    /// Welford mean and sum of squared deviations
    moments: Moments,
    /// Interior mutable state: samples + sort cache
    samples: RefCell<SampleBuffer<T>>,
}

impl<T: Sample> Default for Accumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sample> Accumulator<T> {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty accumulator with room for `capacity` samples
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sum: T::zero(),
            saturated: false,
            max: T::min_value(),
            moments: Moments::new(),
            samples: RefCell::new(SampleBuffer::with_capacity(capacity)),
        }
    }

    /// Add a sample
    ///
    /// Invalidates the sorted prefix used by `min_value()` and `median()`.
    pub fn add(&mut self, value: T) {
        // get_mut() bypasses RefCell runtime checks since we have &mut self
        let buffer = self.samples.get_mut();
        buffer.values.push(value);
        buffer.dirty = true;

        self.accumulate(value);
        if value > self.max {
            self.max = value;
        }
        self.moments.push(value.as_f64());
    }

    /// Number of samples added
    pub fn count(&self) -> u64 {
        self.moments.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Sum of all samples; zero when empty
    ///
    /// Clamped to `T::max_value()`/`T::min_value()` if an integer sum
    /// overflowed, see [`is_sum_saturated()`](Self::is_sum_saturated).
    pub fn sum_value(&self) -> T {
        self.sum
    }

    /// True if the integer sum hit the bounds of `T` and `sum_value()` is
    /// no longer exact
    pub fn is_sum_saturated(&self) -> bool {
        self.saturated
    }

    /// Largest sample
    ///
    /// Returns `T::min_value()` for an empty accumulator, which is not a
    /// meaningful maximum. Check `count()` first or use [`max()`](Self::max).
    pub fn max_value(&self) -> T {
        self.max
    }

    /// Smallest sample
    pub fn min_value(&self) -> Result<T, StatsError> {
        self.ensure_sorted();
        self.samples
            .borrow()
            .values
            .first()
            .copied()
            .ok_or(StatsError::Empty {
                operation: "min_value",
            })
    }

    /// Smallest sample, or `None` when empty
    pub fn min(&self) -> Option<T> {
        self.min_value().ok()
    }

    /// Largest sample, or `None` when empty
    pub fn max(&self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.max)
        }
    }

    /// Arithmetic mean, computed as `sum / count`
    ///
    /// Falls back to the Welford running mean once the sum has saturated.
    /// NaN when empty.
    pub fn mean(&self) -> f64 {
        if self.saturated {
            return self.moments.mean();
        }
        self.sum.as_f64() / self.count() as f64
    }

    /// Exact median
    ///
    /// For an even count this is the average of the two middle samples.
    /// NaN when empty.
    pub fn median(&self) -> f64 {
        let n = self.samples.borrow().values.len();
        if n == 0 {
            return f64::NAN;
        }

        self.ensure_sorted();
        let buffer = self.samples.borrow();
        let mid = n / 2;
        if n % 2 == 0 {
            (buffer.values[mid - 1].as_f64() + buffer.values[mid].as_f64()) / 2.0
        } else {
            buffer.values[mid].as_f64()
        }
    }

    /// Population variance (divides by `n`); NaN when empty
    pub fn variance(&self) -> f64 {
        self.moments.population_variance()
    }

    /// Population standard deviation (divides by `n`); NaN when empty
    pub fn standard_deviation(&self) -> f64 {
        math::sqrt(self.variance())
    }

    /// Snapshot of every statistic
    pub fn summary(&self) -> Summary<T> {
        if self.is_empty() {
            return Summary::empty();
        }

        Summary {
            count: self.count(),
            sum: self.sum,
            min: self.min(),
            max: self.max(),
            mean: Some(self.mean()),
            median: Some(self.median()),
            standard_deviation: Some(self.standard_deviation()),
        }
    }

    fn accumulate(&mut self, value: T) {
        let (sum, clamped) = self.sum.accumulate(value);
        self.sum = sum;
        self.saturated |= clamped;
    }

    /// Sort the prefix if any sample arrived since the last sort.
    fn ensure_sorted(&self) {
        if !self.samples.borrow().dirty {
            return;
        }
        self.samples.borrow_mut().sort_prefix();
    }
}

impl<T: Sample> Sketch for Accumulator<T> {
    type Item = T;

    fn update(&mut self, item: &T) {
        self.add(*item);
    }

    fn merge(&mut self, other: &Self) {
        let other_buffer = other.samples.borrow();
        if other_buffer.values.is_empty() {
            return;
        }

        let buffer = self.samples.get_mut();
        buffer.values.extend_from_slice(&other_buffer.values);
        buffer.dirty = true;

        self.saturated |= other.saturated;
        self.accumulate(other.sum);
        if other.max > self.max {
            self.max = other.max;
        }
        self.moments.merge(&other.moments);
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
            + self.samples.borrow().values.capacity() * core::mem::size_of::<T>()
    }

    fn count(&self) -> u64 {
        self.moments.len()
    }
}

impl<T: Sample> Extend<T> for Accumulator<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|v| self.add(v));
    }
}

impl<T: Sample> FromIterator<T> for Accumulator<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

// ============================================================================
// Tests
// ============================================================================
