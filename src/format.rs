//! Delimited single-line rendering of accumulator snapshots
//!
//! A line holds `count, min, mean, max, standard deviation` separated by a
//! delimiter, TAB by default:
//!
//! ```text
//! 2	1	1.5	2	0.5
//! ```
//!
//! An empty accumulator renders as the count followed by empty fields
//! (`0\t\t\t\t`) rather than NaN tokens.
//!
//! # Example
//!
//! ```
//! use descstats::format::LineFormat;
//! use descstats::Accumulator;
//!
//! let acc: Accumulator<u32> = [1, 2].into_iter().collect();
//!
//! assert_eq!(acc.to_string(), "2\t1\t1.5\t2\t0.5");
//!
//! let csv = LineFormat::new().with_delimiter(',').with_precision(3);
//! assert_eq!(csv.render(&acc.summary()), "2,1,1.500,2,0.500");
//! ```

use core::fmt::{self, Display, Write};

use crate::sample::Sample;
use crate::statistics::{Accumulator, Summary};

#[cfg(feature = "std")]
use std::string::{String, ToString};

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

/// Field layout for one rendered line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineFormat {
    /// Field separator
    delimiter: char,
    /// Fixed number of decimals for the mean and standard deviation;
    /// `None` prints the shortest exact representation
    precision: Option<usize>,
}

impl Default for LineFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl LineFormat {
    /// TAB-separated, shortest float representation
    pub const fn new() -> Self {
        Self {
            delimiter: '\t',
            precision: None,
        }
    }

    /// Use `delimiter` between fields
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Print the mean and standard deviation with `digits` decimals
    ///
    /// Samples (min, max) are always printed with their own `Display`.
    pub const fn with_precision(mut self, digits: usize) -> Self {
        self.precision = Some(digits);
        self
    }

    /// Field separator
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Decimal digits for float fields, if fixed
    pub fn precision(&self) -> Option<usize> {
        self.precision
    }

    /// Render a snapshot to a new string
    pub fn render<T: Display>(&self, summary: &Summary<T>) -> String {
        self.line(summary).to_string()
    }

    /// Lazily formatted line, for use with `write!`/`format!`
    pub fn line<'a, T: Display>(&'a self, summary: &'a Summary<T>) -> Line<'a, T> {
        Line {
            format: self,
            summary,
        }
    }

    /// Write a snapshot to any `fmt::Write` sink
    pub fn write_to<W, T>(&self, out: &mut W, summary: &Summary<T>) -> fmt::Result
    where
        W: Write + ?Sized,
        T: Display,
    {
        write!(out, "{}", summary.count)?;
        out.write_char(self.delimiter)?;
        write_opt(out, summary.min.as_ref())?;
        out.write_char(self.delimiter)?;
        self.write_float(out, summary.mean)?;
        out.write_char(self.delimiter)?;
        write_opt(out, summary.max.as_ref())?;
        out.write_char(self.delimiter)?;
        self.write_float(out, summary.standard_deviation)
    }

    fn write_float<W: Write + ?Sized>(&self, out: &mut W, value: Option<f64>) -> fmt::Result {
        match (value, self.precision) {
            (Some(v), Some(digits)) => write!(out, "{:.*}", digits, v),
            (Some(v), None) => write!(out, "{}", v),
            (None, _) => Ok(()),
        }
    }
}

/// A snapshot paired with its [`LineFormat`], rendered through `Display`
#[derive(Clone, Copy, Debug)]
pub struct Line<'a, T> {
    format: &'a LineFormat,
    summary: &'a Summary<T>,
}

impl<T: Display> Display for Line<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.format.write_to(f, self.summary)
    }
}

fn write_opt<W: Write + ?Sized, T: Display>(out: &mut W, value: Option<&T>) -> fmt::Result {
    match value {
        Some(v) => write!(out, "{}", v),
        None => Ok(()),
    }
}

/// Renders the default TAB-separated line
impl<T: Sample + Display> Display for Accumulator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&LineFormat::new().line(&self.summary()), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_line() {
        let acc: Accumulator<i32> = [3, 1].into_iter().collect();
        assert_eq!(acc.to_string(), "2\t1\t2\t3\t1");
    }

    #[test]
    fn test_empty_line() {
        let acc = Accumulator::<f64>::new();
        assert_eq!(acc.to_string(), "0\t\t\t\t");

        let csv = LineFormat::new().with_delimiter(',').with_precision(2);
        assert_eq!(csv.render(&acc.summary()), "0,,,,");
    }

    #[test]
    fn test_precision_applies_to_float_fields() {
        let acc: Accumulator<f64> = [1.25, 2.5].into_iter().collect();

        let line = LineFormat::new().with_precision(1).render(&acc.summary());
        assert_eq!(line, "2\t1.25\t1.9\t2.5\t0.6");
    }

    #[test]
    fn test_write_to_appends() {
        let acc: Accumulator<u8> = [3].into_iter().collect();
        let mut out = String::from("run-1 ");

        LineFormat::new()
            .with_delimiter(' ')
            .write_to(&mut out, &acc.summary())
            .unwrap();

        assert_eq!(out, "run-1 1 3 3 3 0");
    }

    #[test]
    fn test_line_matches_render() {
        let acc: Accumulator<i64> = [-4, 10, 3].into_iter().collect();
        let summary = acc.summary();
        let format = LineFormat::new().with_delimiter(',').with_precision(2);

        let formatted = format!("[{}]", format.line(&summary));
        assert_eq!(formatted, "[3,-4,3.00,10,5.72]");
        assert_eq!(format.render(&summary), "3,-4,3.00,10,5.72");
    }

    #[test]
    fn test_builder_accessors() {
        let format = LineFormat::default();
        assert_eq!(format.delimiter(), '\t');
        assert_eq!(format.precision(), None);

        let format = format.with_delimiter(';').with_precision(4);
        assert_eq!(format.delimiter(), ';');
        assert_eq!(format.precision(), Some(4));
    }
}
