//! Tabular model: the aggregate dataset, run-to-run aggregation and the
//! grouping that feeds the charts.

pub mod dataset;
pub mod series;

pub use dataset::{Dataset, DatasetError, aggregate, columns};
pub use series::series_by_algorithm;
