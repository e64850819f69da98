//! Summary and online statistics over sample values.

use crate::error::{Result, SeriesError};

/// Population mean of `vals`.
///
/// # Errors
/// Returns [`SeriesError::EmptyData`] if `vals` is empty.
pub fn mean(vals: &[f64]) -> Result<f64> {
    if vals.is_empty() {
        return Err(SeriesError::EmptyData { op: "mean" });
    }
    Ok(vals.iter().sum::<f64>() / vals.len() as f64)
}

/// Population standard deviation of `vals`.
///
/// # Errors
/// Returns [`SeriesError::EmptyData`] if `vals` is empty.
pub fn std_dev(vals: &[f64]) -> Result<f64> {
    if vals.is_empty() {
        return Err(SeriesError::EmptyData { op: "std_dev" });
    }
    let mean = vals.iter().sum::<f64>() / vals.len() as f64;
    let var = vals.iter().map(|&val| (val - mean).powi(2)).sum::<f64>() / vals.len() as f64;
    Ok(var.sqrt())
}

/// Euclidean 2-norm of `vals`. The norm of an empty slice is 0.
pub fn norm(vals: &[f64]) -> f64 {
    vals.iter().map(|&val| val * val).sum::<f64>().sqrt()
}

/// Running mean and standard deviation over a growing sample stream.
///
/// Uses Welford's update so each added value costs O(1) and no history
/// has to be rescanned.
pub struct Accumulator {
    n_vals: usize,
    mean: f64,
    diff_2_sum: f64,
}

impl Accumulator {
    pub fn new() -> Self {
        Self {
            n_vals: 0,
            mean: 0.0,
            diff_2_sum: 0.0,
        }
    }

    pub fn add(&mut self, val: f64) {
        self.n_vals += 1;

        let diff_a = val - self.mean;
        self.mean += diff_a / self.n_vals as f64;

        let diff_b = val - self.mean;
        self.diff_2_sum += diff_a * diff_b;
    }

    pub fn count(&self) -> usize {
        self.n_vals
    }

    pub fn mean(&self) -> f64 {
        if self.n_vals == 0 {
            return f64::NAN;
        }
        self.mean
    }

    /// Population standard deviation of the values added so far.
    pub fn std_dev(&self) -> f64 {
        if self.n_vals == 0 {
            return f64::NAN;
        }
        (self.diff_2_sum / self.n_vals as f64).sqrt()
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}
