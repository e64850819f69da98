//! Fixed-length time-series container.

use crate::error::{Result, SeriesError};
use crate::lazy::Lazy;
use crate::series::Series;
use crate::stats;
use std::fmt;
use std::ops::Neg;

/// Number of (time, value) pairs shown before string forms truncate.
const MAX_SHOWN_PAIRS: usize = 5;

/// A time series backed by two parallel ordered sequences.
///
/// Times are fixed at construction; values are mutable per index. The
/// (time, value) pairs sequence is a computed view over the two vectors,
/// so it can never fall out of sync with them.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    times: Vec<f64>,
    values: Vec<f64>,
    cached_norm: Lazy<f64>,
}

impl TimeSeries {
    /// Create a time series from two equal-length sequences.
    ///
    /// # Errors
    /// Returns [`SeriesError::LengthMismatch`] if the sequences differ in
    /// length.
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        if times.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                n_times: times.len(),
                n_values: values.len(),
            });
        }
        Ok(Self {
            times,
            values,
            cached_norm: Lazy::new(),
        })
    }

    /// Number of stored samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Replace the value at position `i`, leaving its time unchanged.
    ///
    /// # Errors
    /// Returns [`SeriesError::OutOfRange`] if `i` is not a valid index.
    pub fn set(&mut self, i: usize, value: f64) -> Result<()> {
        let len = self.values.len();
        let slot = self
            .values
            .get_mut(i)
            .ok_or(SeriesError::OutOfRange { index: i, len })?;
        *slot = value;

        // The memoized norm is stale now; start over with an empty cell.
        self.cached_norm = Lazy::new();

        Ok(())
    }

    /// Snapshot of the values in storage order (a copy, not an alias).
    pub fn values(&self) -> Vec<f64> {
        self.values.clone()
    }

    /// Snapshot of the times in storage order (a copy, not an alias).
    pub fn times(&self) -> Vec<f64> {
        self.times.clone()
    }

    /// Population mean of the stored values.
    ///
    /// # Errors
    /// Returns [`SeriesError::EmptyData`] on a zero-length series.
    pub fn mean(&self) -> Result<f64> {
        stats::mean(&self.values)
    }

    /// Population standard deviation of the stored values.
    ///
    /// # Errors
    /// Returns [`SeriesError::EmptyData`] on a zero-length series.
    pub fn std(&self) -> Result<f64> {
        stats::std_dev(&self.values)
    }

    /// Euclidean 2-norm of the stored values, computed once and memoized.
    pub fn norm(&self) -> f64 {
        *self.cached_norm.get_or_init(|| stats::norm(&self.values))
    }

    /// True iff the 2-norm of the values is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.norm() == 0.0
    }

    /// Pointwise sum with an aligned series.
    pub fn add(&self, rhs: &dyn Series) -> Result<TimeSeries> {
        self.zip_with(rhs, "add", |a, b| a + b)
    }

    /// Pointwise difference with an aligned series.
    pub fn sub(&self, rhs: &dyn Series) -> Result<TimeSeries> {
        self.zip_with(rhs, "sub", |a, b| a - b)
    }

    /// Pointwise product with an aligned series.
    pub fn mul(&self, rhs: &dyn Series) -> Result<TimeSeries> {
        self.zip_with(rhs, "mul", |a, b| a * b)
    }

    /// Pointwise value equality with an aligned series.
    ///
    /// Equality is only defined between aligned series, so this is a
    /// fallible method rather than a `PartialEq` impl.
    ///
    /// # Errors
    /// Fails with the same alignment errors as the arithmetic operations.
    pub fn eq_aligned(&self, rhs: &dyn Series) -> Result<bool> {
        self.check_aligned(rhs, "eq")?;
        Ok(self.values.iter().copied().eq(rhs.iter_values()))
    }

    /// Shared precondition of every binary operation: both operands must
    /// expose time data and their time sequences must match exactly.
    fn check_aligned(&self, rhs: &dyn Series, op: &'static str) -> Result<()> {
        let rhs_times = rhs
            .time_data()
            .ok_or(SeriesError::Unsupported { op })?;
        if self.times != rhs_times {
            return Err(SeriesError::Misaligned {
                lhs: self.repr(),
                rhs: rhs.repr(),
            });
        }
        Ok(())
    }

    fn zip_with<F>(&self, rhs: &dyn Series, op: &'static str, f: F) -> Result<TimeSeries>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.check_aligned(rhs, op)?;
        let values = self
            .values
            .iter()
            .zip(rhs.iter_values())
            .map(|(&a, b)| f(a, b))
            .collect();
        TimeSeries::new(self.times.clone(), values)
    }

    /// Plain string form of the pairs sequence with the truncation rule.
    fn pairs_string(&self) -> String {
        let shown: Vec<_> = self
            .iter_items()
            .take(MAX_SHOWN_PAIRS)
            .map(|(time, val)| format!("({time}, {val})"))
            .collect();
        if self.len() <= MAX_SHOWN_PAIRS {
            format!("[{}]", shown.join(", "))
        } else {
            format!("[{}, ...]", shown.join(", "))
        }
    }
}

impl Series for TimeSeries {
    fn get(&self, i: usize) -> Result<f64> {
        self.values
            .get(i)
            .copied()
            .ok_or(SeriesError::OutOfRange {
                index: i,
                len: self.values.len(),
            })
    }

    fn contains(&self, value: f64) -> bool {
        self.values.contains(&value)
    }

    fn iter_values(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        Box::new(self.values.iter().copied())
    }

    fn iter_times(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        Box::new(self.times.iter().copied())
    }

    fn iter_items(&self) -> Box<dyn Iterator<Item = (f64, f64)> + '_> {
        Box::new(
            self.times
                .iter()
                .copied()
                .zip(self.values.iter().copied()),
        )
    }

    fn time_data(&self) -> Option<&[f64]> {
        Some(&self.times)
    }

    fn repr(&self) -> String {
        let len = self.len();
        let pairs = self.pairs_string();
        if len <= MAX_SHOWN_PAIRS {
            format!("TimeSeries(len = {len}; timeseries = {pairs})")
        } else {
            format!("TimeSeries(timeseries = {pairs}; len = {len})")
        }
    }
}

impl fmt::Display for TimeSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pairs_string())
    }
}

impl Neg for &TimeSeries {
    type Output = TimeSeries;

    /// A new series with every value's sign flipped, times unchanged.
    fn neg(self) -> TimeSeries {
        TimeSeries {
            times: self.times.clone(),
            values: self.values.iter().map(|&val| -val).collect(),
            cached_norm: Lazy::new(),
        }
    }
}
