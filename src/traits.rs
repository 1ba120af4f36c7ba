//! Core traits and errors for streaming accumulators
//!
//! Every accumulator implements the base [`Sketch`] trait, which covers
//! ingestion, merging of partial results and bookkeeping.

use core::fmt::Debug;

/// Error returned by accessors whose result is undefined for the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// The operation needs at least one sample
    Empty {
        /// Name of the accessor that was called
        operation: &'static str,
    },
}

impl core::fmt::Display for StatsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatsError::Empty { operation } => {
                write!(f, "{} is undefined for an empty accumulator", operation)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}

/// Core trait for streaming accumulators
///
/// There is deliberately no `clear`: a new statistics run starts from a
/// fresh instance.
pub trait Sketch: Clone + Debug {
    /// The type of item this sketch processes
    type Item;

    /// Add an item to the sketch
    fn update(&mut self, item: &Self::Item);

    /// Merge another sketch into this one
    ///
    /// The result is the same as if every item of `other` had been passed
    /// to [`update`](Sketch::update) on `self`.
    fn merge(&mut self, other: &Self);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of items processed
    fn count(&self) -> u64;

    /// Check if sketch is empty
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StatsError::Empty {
            operation: "min_value",
        };
        let mut buf = String::new();
        core::fmt::write(&mut buf, format_args!("{}", err)).unwrap();
        assert_eq!(buf, "min_value is undefined for an empty accumulator");
    }
}
