//! Capability contracts for time-series-like types.

use crate::error::Result;

/// Read-only contract every time-series-like type satisfies, independent of
/// its storage strategy.
///
/// The three `iter_*` methods return a fresh iterator on every call, so
/// iteration is always restartable.
pub trait Series {
    /// Get the value at position `i`.
    ///
    /// # Errors
    /// Returns [`SeriesError::OutOfRange`](crate::SeriesError::OutOfRange)
    /// if `i` is not a valid index.
    fn get(&self, i: usize) -> Result<f64>;

    /// True iff some stored value (not time) equals `value`.
    fn contains(&self, value: f64) -> bool;

    /// Iterate over the values in storage order.
    fn iter_values(&self) -> Box<dyn Iterator<Item = f64> + '_>;

    /// Iterate over the times in storage order.
    fn iter_times(&self) -> Box<dyn Iterator<Item = f64> + '_>;

    /// Iterate over (time, value) pairs in storage order.
    fn iter_items(&self) -> Box<dyn Iterator<Item = (f64, f64)> + '_>;

    /// The time axis of this series, if it has one.
    ///
    /// Operations that require aligned time points (arithmetic, equality)
    /// are unsupported for operands that return `None`.
    fn time_data(&self) -> Option<&[f64]> {
        None
    }

    /// Diagnostic string form, with the concrete type name and length.
    fn repr(&self) -> String;
}

/// A sample of an online statistic: position, value and the running
/// aggregate at that position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnlineSample {
    pub position: usize,
    pub value: f64,
    pub stat: f64,
}

/// Contract for series that grow incrementally as a live stream.
pub trait StreamSeries: Series {
    /// Append `chunk` new samples to the stream.
    fn produce(&mut self, chunk: usize) -> Result<()>;

    /// Iterate over (position, value, running mean) samples.
    ///
    /// The running mean is maintained incrementally while samples are
    /// produced; this call never rescans the stream.
    fn online_mean(&self) -> Box<dyn Iterator<Item = OnlineSample> + '_>;

    /// Iterate over (position, value, running standard deviation) samples.
    fn online_dev(&self) -> Box<dyn Iterator<Item = OnlineSample> + '_>;
}
