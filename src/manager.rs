use crate::config::GenConfig;
use crate::container::TimeSeries;
use crate::generate::SeriesMaker;
use crate::series::Series;
use anyhow::{Context, Result};
use glob::glob;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

/// On-disk form of one generated series: two parallel rows.
#[derive(Serialize, Deserialize)]
struct SeriesRecord {
    times: Vec<f64>,
    values: Vec<f64>,
}

/// Owns a data directory of generated series dumps.
pub struct Manager {
    data_dir: PathBuf,
    cfg: GenConfig,
}

impl Manager {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();

        let cfg = GenConfig::from_file(data_dir.join("config.toml"))
            .context("failed to construct cfg")?;
        log::info!("{cfg:#?}");

        Ok(Self { data_dir, cfg })
    }

    /// Generate `n_series` new series, continuing the existing numbering.
    pub fn generate(&self) -> Result<()> {
        let offset = self.count_series_files().context("failed to count series files")?;

        let mut maker = SeriesMaker::new(self.cfg.clone()).context("failed to construct maker")?;

        for idx in 0..self.cfg.n_series {
            let series = maker.make_series().context("failed to make series")?;
            let file = self.series_file(offset + idx);
            write_series(&series, &file)
                .with_context(|| format!("failed to write {file:?}"))?;
        }

        log::info!("generated {} series", self.cfg.n_series);

        Ok(())
    }

    /// Log the diagnostic form of every stored series.
    pub fn inspect(&self) -> Result<()> {
        let n_files = self.count_series_files().context("failed to count series files")?;

        for idx in 0..n_files {
            let file = self.series_file(idx);
            let series =
                Self::load_series(&file).with_context(|| format!("failed to load {file:?}"))?;
            log::info!("{}: {}", idx, series.repr());
        }

        log::info!("inspected {n_files} series");

        Ok(())
    }

    /// Remove every generated series dump.
    pub fn clean(&self) -> Result<()> {
        let n_files = self.count_series_files().context("failed to count series files")?;

        for idx in 0..n_files {
            let file = self.series_file(idx);
            fs::remove_file(&file).with_context(|| format!("failed to remove {file:?}"))?;
        }

        log::info!("removed {n_files} series");

        Ok(())
    }

    /// Reconstruct a [`TimeSeries`] from a stored dump.
    pub fn load_series<P: AsRef<Path>>(file: P) -> Result<TimeSeries> {
        let file = file.as_ref();
        let file = File::open(file).with_context(|| format!("failed to open {file:?}"))?;
        let mut reader = BufReader::new(file);

        let record: SeriesRecord =
            rmp_serde::decode::from_read(&mut reader).context("failed to deserialize record")?;

        let series = TimeSeries::new(record.times, record.values)
            .context("failed to construct series from record")?;

        Ok(series)
    }

    fn count_series_files(&self) -> Result<usize> {
        let pattern = self.data_dir.join("timeseries-*.msgpack");
        let pattern = pattern.to_str().context("pattern is not valid UTF-8")?;
        let count = glob(pattern)
            .context("failed to glob series files")?
            .filter_map(Result::ok)
            .count();
        Ok(count)
    }

    fn series_file(&self, idx: usize) -> PathBuf {
        self.data_dir.join(format!("timeseries-{idx:04}.msgpack"))
    }
}

fn write_series(series: &TimeSeries, file: &Path) -> Result<()> {
    let record = SeriesRecord {
        times: series.times(),
        values: series.values(),
    };

    let file = File::create(file).with_context(|| format!("failed to create {file:?}"))?;
    let mut writer = BufWriter::new(file);

    rmp_serde::encode::write(&mut writer, &record).context("failed to serialize record")?;

    writer.flush().context("failed to flush writer stream")?;

    Ok(())
}
