//! Descriptive statistics for streaming data
//!
//! This module provides an exact accumulator that retains its samples for
//! order statistics, and the single-pass moment tracker it is built on.
//!
//! # Example
//!
//! ```
//! use descstats::statistics::Accumulator;
//!
//! let mut stats = Accumulator::new();
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     stats.add(value);
//! }
//!
//! println!("Mean: {}", stats.mean());
//! println!("Median: {}", stats.median());
//! println!("Stddev: {}", stats.standard_deviation());
//! println!("Min: {:?}", stats.min());
//! println!("Max: {:?}", stats.max());
//! ```

mod descriptive;
mod moments;
mod summary;

pub use descriptive::Accumulator;
pub use moments::Moments;
pub use summary::Summary;
