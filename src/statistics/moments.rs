//! Running mean and variance
//!
//! Welford's numerically stable online algorithm, with Chan et al.'s
//! parallel formula for combining partial results.

/// First and second central moments of a stream, updated one value at a time
///
/// Tracks the running mean and `m2`, the sum of squared deviations from the
/// mean. Avoids the catastrophic cancellation of the naive
/// `E[X²] − (E[X])²` formula.
///
/// # Example
///
/// ```
/// use descstats::statistics::Moments;
///
/// let mut moments = Moments::new();
///
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     moments.push(value);
/// }
///
/// assert!((moments.mean() - 5.0).abs() < 1e-12);
/// assert!((moments.population_variance() - 4.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Moments {
    /// Number of values seen
    count: u64,
    /// Running mean
    mean: f64,
    /// Sum of squared differences from mean (M2 in Welford's algorithm)
    m2: f64,
}

impl Moments {
    /// Create an empty moment pair
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value
    #[inline]
    pub fn push(&mut self, value: f64) {
        self.count += 1;

        let prev_mean = self.mean;
        self.mean = prev_mean + (value - prev_mean) / self.count as f64;
        self.m2 += (value - prev_mean) * (value - self.mean);
    }

    /// Number of values pushed
    pub fn len(&self) -> u64 {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Running mean; zero when empty
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sum of squared deviations from the mean
    pub fn m2(&self) -> f64 {
        self.m2
    }

    /// Population variance (`m2 / n`), NaN when empty
    pub fn population_variance(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.m2 / self.count as f64
        }
    }

    /// Combine with the moments of a disjoint stream
    pub fn merge(&mut self, other: &Self) {
        if other.count == 0 {
            return;
        }

        if self.count == 0 {
            *self = *other;
            return;
        }

        let combined_count = self.count + other.count;
        let delta = other.mean - self.mean;

        let combined_mean = self.mean + delta * (other.count as f64 / combined_count as f64);
        let combined_m2 = self.m2
            + other.m2
            + delta * delta * (self.count as f64 * other.count as f64 / combined_count as f64);

        self.count = combined_count;
        self.mean = combined_mean;
        self.m2 = combined_m2;
    }
}
