//! In-memory time series with aligned arithmetic and online statistics.
//!
//! The core is a pair of capability contracts: [`Series`], the minimal
//! read-only surface every time-series-like type satisfies, and
//! [`StreamSeries`] for series that grow incrementally. [`TimeSeries`] is
//! the sized implementation, backed by two parallel ordered sequences;
//! [`RandomStream`] is a streaming implementation with running statistics.
//!
//! Binary operations between series are strict: both operands must expose
//! identical time sequences or the operation fails (see [`SeriesError`]).
//!
//! The `config`, `generate` and `manager` modules implement the synthetic
//! series generation workflow driven by the `seriate` binary.

pub mod config;
pub mod container;
pub mod error;
pub mod generate;
pub mod lazy;
pub mod manager;
pub mod series;
pub mod stats;
pub mod stream;

pub use container::TimeSeries;
pub use error::{Result, SeriesError};
pub use series::{OnlineSample, Series, StreamSeries};
pub use stream::RandomStream;
