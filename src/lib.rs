//! # Descstats
//!
//! Streaming descriptive statistics for Rust.
//!
//! Feed samples one at a time into an [`Accumulator`] and ask for count,
//! sum, minimum, maximum, mean, exact median and population standard
//! deviation whenever you need them. Mean and variance are maintained in a
//! single pass with Welford's algorithm; the minimum and median come from a
//! lazily computed partial sort of the retained samples.
//!
//! ## Quick Start
//!
//! ```rust
//! use descstats::prelude::*;
//!
//! let mut latency = Accumulator::new();
//! for micros in [120u32, 95, 130, 101, 99] {
//!     latency.add(micros);
//! }
//!
//! assert_eq!(latency.count(), 5);
//! assert_eq!(latency.min_value(), Ok(95));
//! assert_eq!(latency.median(), 101.0);
//! println!("{}", latency); // count, min, mean, max, stddev
//! ```
//!
//! ## Combining Partial Results
//!
//! Accumulators are single-owner values. To gather statistics from several
//! producers, give each one its own accumulator and merge them afterwards:
//!
//! ```rust
//! use descstats::Accumulator;
//! use descstats::traits::Sketch;
//!
//! let mut worker1 = Accumulator::new();
//! let mut worker2 = Accumulator::new();
//!
//! worker1.add(1.0);
//! worker2.add(3.0);
//!
//! worker1.merge(&worker2);
//! assert_eq!(worker1.mean(), 2.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support; without it the crate is
//!   `no_std` + `alloc` and uses `libm`
//! - `serde`: Enable serialization of [`Summary`] snapshots

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod format;
pub mod sample;
pub mod statistics;
pub mod traits;

mod math;

pub mod prelude {
    pub use crate::format::{Line, LineFormat};
    pub use crate::sample::Sample;
    pub use crate::statistics::{Accumulator, Moments, Summary};
    pub use crate::traits::*;
}

pub use sample::Sample;
pub use statistics::{Accumulator, Summary};
pub use traits::StatsError;
