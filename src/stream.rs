//! Streaming time series backed by a random sampler.

use crate::error::{Result, SeriesError};
use crate::series::{OnlineSample, Series, StreamSeries};
use crate::stats::Accumulator;
use rand::prelude::*;
use rand_chacha::ChaCha12Rng;
use rand_distr::{Normal, NormalError};

/// Running (mean, standard deviation) snapshot taken after one sample.
#[derive(Debug, Clone, Copy)]
struct StatSnapshot {
    mean: f64,
    std_dev: f64,
}

/// A conceptually unbounded series that grows by sampling a normal
/// distribution, keeping online statistics per produced sample.
///
/// The stream is indexed by sample position rather than by an explicit
/// time axis, so [`Series::time_data`] returns `None` and aligned
/// arithmetic against it is unsupported.
pub struct RandomStream {
    dist: Normal<f64>,
    rng: ChaCha12Rng,
    values: Vec<f64>,
    snapshots: Vec<StatSnapshot>,
    acc: Accumulator,
}

impl RandomStream {
    /// Create an empty stream sampling `Normal(mean, std_dev)` with a
    /// deterministic seed.
    ///
    /// # Errors
    /// Fails if `std_dev` is not a valid normal scale.
    pub fn new(mean: f64, std_dev: f64, seed: u64) -> std::result::Result<Self, NormalError> {
        let dist = Normal::new(mean, std_dev)?;
        Ok(Self {
            dist,
            rng: ChaCha12Rng::seed_from_u64(seed),
            values: Vec::new(),
            snapshots: Vec::new(),
            acc: Accumulator::new(),
        })
    }

    /// Number of samples produced so far.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Series for RandomStream {
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
        Box::new((0..self.values.len()).map(|i| i as f64))
    }

    fn iter_items(&self) -> Box<dyn Iterator<Item = (f64, f64)> + '_> {
        Box::new(
            self.values
                .iter()
                .copied()
                .enumerate()
                .map(|(i, val)| (i as f64, val)),
        )
    }

    fn repr(&self) -> String {
        format!(
            "RandomStream(len = {}; mean = {}, std_dev = {})",
            self.values.len(),
            self.acc.mean(),
            self.acc.std_dev()
        )
    }
}

impl StreamSeries for RandomStream {
    fn produce(&mut self, chunk: usize) -> Result<()> {
        self.values.reserve(chunk);
        self.snapshots.reserve(chunk);

        for _ in 0..chunk {
            let val = self.dist.sample(&mut self.rng);
            self.acc.add(val);
            self.values.push(val);
            self.snapshots.push(StatSnapshot {
                mean: self.acc.mean(),
                std_dev: self.acc.std_dev(),
            });
        }

        Ok(())
    }

    fn online_mean(&self) -> Box<dyn Iterator<Item = OnlineSample> + '_> {
        Box::new(
            self.values
                .iter()
                .zip(self.snapshots.iter())
                .enumerate()
                .map(|(position, (&value, snap))| OnlineSample {
                    position,
                    value,
                    stat: snap.mean,
                }),
        )
    }

    fn online_dev(&self) -> Box<dyn Iterator<Item = OnlineSample> + '_> {
        Box::new(
            self.values
                .iter()
                .zip(self.snapshots.iter())
                .enumerate()
                .map(|(position, (&value, snap))| OnlineSample {
                    position,
                    value,
                    stat: snap.std_dev,
                }),
        )
    }
}
