use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, fs, ops::RangeBounds, path::Path};

/// Synthetic-series generation parameters.
///
/// Loaded from a TOML file and validated before use.
/// See [`GenConfig::from_file`] for loading.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct GenConfig {
    /// Number of series to generate per run.
    pub n_series: usize,
    /// Number of samples per series.
    pub n_points: usize,

    /// Center of the Gaussian bump, on the [0, 1) time axis.
    pub center: f64,
    /// Width (standard deviation) of the Gaussian bump.
    pub width: f64,
    /// Scale of the additive normal noise.
    pub jitter: f64,
}

impl GenConfig {
    /// Load a [`GenConfig`] from a file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        let config: GenConfig =
            toml::from_str(&contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        check_num(self.n_series, 1..1_000_000).context("invalid number of series")?;
        check_num(self.n_points, 1..1_000_000).context("invalid number of points")?;

        check_num(self.center, 0.0..1.0).context("invalid bump center")?;
        if !(self.width > 0.0) {
            bail!("bump width must be positive, but is {}", self.width);
        }
        check_num(self.jitter, 0.0..f64::INFINITY).context("invalid noise scale")?;

        Ok(())
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}
