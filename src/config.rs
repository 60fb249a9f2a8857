//! Per-invocation configuration, built from the command line and passed
//! explicitly into the pipelines.

use crate::log::RunMetadata;
use std::path::PathBuf;

pub const DEFAULT_DATA_PATH: &str = "data.csv";

/// Settings for one `ingest` run.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    pub log_path: PathBuf,
    pub data_path: PathBuf,
    pub metadata: RunMetadata,
}

/// Settings for one `plot` run.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub data_path: PathBuf,
    pub out_path: PathBuf,
    /// Also write each figure as a standalone SVG into this directory.
    pub svg_dir: Option<PathBuf>,
    pub problem_type: Option<String>,
    pub goal_check_delay: Option<u64>,
}
