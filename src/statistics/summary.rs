//! Point-in-time snapshot of an accumulator

use crate::sample::Sample;

/// Every statistic of an [`Accumulator`](crate::Accumulator) at one moment
///
/// Order and moment statistics are `None` when no sample has been added,
/// instead of the NaN and sentinel values the accumulator accessors return.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary<T> {
    /// Number of samples
    pub count: u64,
    /// Sum of samples
    pub sum: T,
    /// Smallest sample
    pub min: Option<T>,
    /// Largest sample
    pub max: Option<T>,
    /// Arithmetic mean
    pub mean: Option<f64>,
    /// Exact median
    pub median: Option<f64>,
    /// Population standard deviation
    pub standard_deviation: Option<f64>,
}

impl<T: Sample> Summary<T> {
    /// Snapshot of an accumulator with no samples
    pub fn empty() -> Self {
        Self {
            count: 0,
            sum: T::zero(),
            min: None,
            max: None,
            mean: None,
            median: None,
            standard_deviation: None,
        }
    }

    /// Check if the snapshot holds no samples
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Summary<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Summary", 7)?;
        state.serialize_field("count", &self.count)?;
        state.serialize_field("sum", &self.sum)?;
        state.serialize_field("min", &self.min)?;
        state.serialize_field("max", &self.max)?;
        state.serialize_field("mean", &self.mean)?;
        state.serialize_field("median", &self.median)?;
        state.serialize_field("standard_deviation", &self.standard_deviation)?;
        state.end()
    }
}
