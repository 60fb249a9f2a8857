use crate::config::IngestConfig;
use crate::log::{self, ParseError};
use crate::model::{Dataset, aggregate};
use crate::store::{self, StoreError};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestSummary {
    /// Records parsed from this run's log.
    pub parsed: usize,
    /// Rows in the dataset before this run; None when no dataset existed.
    pub prior_rows: Option<usize>,
    /// Rows written back.
    pub total_rows: usize,
}

/// Parse one log, append it to the aggregate dataset and write the dataset
/// back in full.
///
/// The dataset file is only written once the new table has been built, so a
/// failed parse leaves it untouched. Re-ingesting the same log appends its rows
/// again.
pub fn run(config: &IngestConfig) -> Result<IngestSummary, IngestError> {
    let records = log::parse_log_file(&config.log_path, &config.metadata)?;
    let new = Dataset::from_records(&records);

    let prior = store::load(&config.data_path)?;
    let prior_rows = prior.as_ref().map(Dataset::len);

    let merged = aggregate(prior, new);
    store::save(&config.data_path, &merged)?;

    info!(
        parsed = records.len(),
        total = merged.len(),
        path = %config.data_path.display(),
        "updated dataset"
    );

    Ok(IngestSummary {
        parsed: records.len(),
        prior_rows,
        total_rows: merged.len(),
    })
}
