//! Synthetic time-series generation.

use crate::config::GenConfig;
use crate::container::TimeSeries;
use anyhow::{Context, Result};
use rand::prelude::*;
use rand_chacha::ChaCha12Rng;
use rand_distr::Normal;
use std::f64::consts::PI;

/// Builds synthetic series: a Gaussian bump on an equally spaced [0, 1)
/// time axis, plus normal noise.
pub struct SeriesMaker {
    cfg: GenConfig,
    noise: Normal<f64>,
    rng: ChaCha12Rng,
}

impl SeriesMaker {
    /// Create a maker seeded from the operating system.
    pub fn new(cfg: GenConfig) -> Result<Self> {
        let rng = ChaCha12Rng::try_from_os_rng().context("failed to seed rng")?;
        Self::with_rng(cfg, rng)
    }

    /// Create a maker with a fixed seed, for reproducible output.
    pub fn with_seed(cfg: GenConfig, seed: u64) -> Result<Self> {
        Self::with_rng(cfg, ChaCha12Rng::seed_from_u64(seed))
    }

    fn with_rng(cfg: GenConfig, rng: ChaCha12Rng) -> Result<Self> {
        let noise = Normal::new(0.0, 1.0).context("failed to construct noise distribution")?;
        Ok(Self { cfg, noise, rng })
    }

    /// Make one synthetic series.
    pub fn make_series(&mut self) -> Result<TimeSeries> {
        let n = self.cfg.n_points;
        let step = 1.0 / n as f64;

        let times: Vec<f64> = (0..n).map(|i| i as f64 * step).collect();
        let values: Vec<f64> = times
            .iter()
            .map(|&t| {
                gaussian_pdf(t, self.cfg.center, self.cfg.width)
                    + self.cfg.jitter * self.noise.sample(&mut self.rng)
            })
            .collect();

        TimeSeries::new(times, values).context("failed to construct series")
    }
}

fn gaussian_pdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    let z = (x - mean) / std_dev;
    (-0.5 * z * z).exp() / (std_dev * (2.0 * PI).sqrt())
}
